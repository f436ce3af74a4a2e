use yew::prelude::*;

use crate::view::BulbPalette;

#[derive(Properties, PartialEq, Clone)]
pub struct BulbProps {
    pub palette: BulbPalette,
}

#[function_component(Bulb)]
pub fn bulb(props: &BulbProps) -> Html {
    let p = props.palette;
    html! {
        <div class={classes!("bulb-wrap", p.glow.then_some("on"))}>
            <svg viewBox="0 0 64 96" width="128" height="192" role="img" aria-label="light bulb">
                <circle
                    id="bulb-body"
                    class={classes!(p.glow.then_some("bulb-body-on"))}
                    cx="32" cy="30" r="22"
                    fill={p.body}
                />
                <path
                    id="bulb-filament"
                    class={classes!(p.glow.then_some("filament-on"))}
                    d="M24 40 Q32 24 40 40 L37 44 L27 44 Z"
                    fill={p.filament}
                />
                <rect id="bulb-base-light-1" x="22" y="56" width="20" height="7" rx="3" fill={p.base_light} />
                <rect id="bulb-base-dark" x="22" y="65" width="20" height="7" rx="3" fill={p.base_dark} />
                <rect id="bulb-base-light-2" x="25" y="74" width="14" height="7" rx="3" fill={p.base_light} />
            </svg>
        </div>
    }
}
