//! Dynamic favicon: a small SVG lamp reusing the bulb palette, applied as a
//! data URI on the icon link element.

use crate::view::BulbPalette;

pub fn data_uri(palette: &BulbPalette) -> String {
    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 64 64'>\
         <circle cx='32' cy='24' r='17' fill='{body}'/>\
         <path d='M26 30 Q32 18 38 30' fill='{filament}'/>\
         <rect x='24' y='43' width='16' height='5' rx='2' fill='{light}'/>\
         <rect x='24' y='49' width='16' height='5' rx='2' fill='{dark}'/>\
         <rect x='26' y='55' width='12' height='5' rx='2' fill='{light}'/>\
         </svg>",
        body = palette.body,
        filament = palette.filament,
        light = palette.base_light,
        dark = palette.base_dark,
    );
    // '#' terminates a data URI, everything else in the markup is URI-safe
    format!("data:image/svg+xml,{}", svg.replace('#', "%23"))
}

/// Points `link[rel="icon"]` at the regenerated icon, creating the element if
/// the host page does not carry one.
pub fn apply(palette: &BulbPalette) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let link = match document.query_selector("link[rel='icon']") {
        Ok(Some(existing)) => existing,
        _ => {
            let Ok(created) = document.create_element("link") else {
                return;
            };
            let _ = created.set_attribute("rel", "icon");
            if let Some(head) = document.head() {
                let _ = head.append_child(&created);
            }
            created
        }
    };
    let _ = link.set_attribute("href", &data_uri(palette));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uri_is_inline_svg_with_escaped_colors() {
        let uri = data_uri(&BulbPalette::lit(true));
        assert!(uri.starts_with("data:image/svg+xml,<svg"));
        assert!(!uri.contains('#'));
        assert!(uri.contains("%23FFE46A"));
    }

    #[test]
    fn uri_tracks_the_palette() {
        let lit = data_uri(&BulbPalette::lit(true));
        let dark = data_uri(&BulbPalette::lit(false));
        assert_ne!(lit, dark);
        assert!(dark.contains("%231e1e2e"));
    }
}
