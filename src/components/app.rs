use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::favicon;
use crate::model::{Grid, PowerState};
use crate::net;
use crate::util::{Locale, cerror};
use crate::view::{self, BulbPalette, StateClass};

use super::bulb::Bulb;
use super::history_list::HistoryList;
use super::status_badge::StatusBadge;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub locale: Locale,
    pub state_url: &'static str,
    pub sw_url: &'static str,
    pub poll_interval_ms: i32,
    /// Favicon regeneration is a post-render hook; hosts can switch it off.
    pub favicon: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            state_url: "/api/state",
            sw_url: "/sw.js",
            poll_interval_ms: 60_000,
            favicon: true,
        }
    }
}

#[derive(Properties, PartialEq, Clone, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub config: AppConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let state = use_state(net::bootstrap_state);

    // Register the worker once, then poll the endpoint on a fixed interval.
    // A failed or slow fetch leaves the last rendered payload untouched;
    // overlapping in-flight requests are not deduplicated.
    {
        let state = state.clone();
        let config = props.config.clone();
        use_effect_with((), move |_| {
            net::register_service_worker(config.sw_url);

            let window = web_sys::window().expect("no global `window` exists");
            let url = config.state_url;
            let tick = Closure::wrap(Box::new(move || {
                let state = state.clone();
                spawn_local(async move {
                    match net::fetch_state(url).await {
                        Ok(payload) => state.set(payload),
                        Err(err) => cerror(&format!("failed to fetch power state: {err}")),
                    }
                });
            }) as Box<dyn FnMut()>);
            let interval_id = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    tick.as_ref().unchecked_ref(),
                    config.poll_interval_ms,
                )
                .unwrap();

            let window = window.clone();
            move || {
                window.clear_interval_with_handle(interval_id);
                drop(tick);
            }
        });
    }

    // Body class and favicon follow the grid; pending keeps the previous icon.
    {
        let favicon_enabled = props.config.favicon;
        use_effect_with(state.grid, move |grid| {
            if let Some(body) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body())
            {
                body.set_class_name(StateClass::from_grid(*grid).body_css());
            }
            if favicon_enabled && *grid != Grid::Pending {
                favicon::apply(&BulbPalette::for_grid(*grid));
            }
            || ()
        });
    }

    let payload: PowerState = (*state).clone();
    let state_class = StateClass::from_grid(payload.grid);
    let outage = view::outage_line(&payload, props.config.locale);
    let rows = view::history_rows(&payload.history, props.config.locale);

    html! {
        <div id="root" class={classes!("page", payload.demo.then_some("demo"))}>
            <StatusBadge state={state_class} address={payload.address.clone()} outage={outage} />
            <Bulb palette={BulbPalette::for_grid(payload.grid)} />
            <HistoryList state_css={state_class.css()} rows={rows} />
            {
                if payload.version.is_empty() {
                    html! {}
                } else {
                    html! { <footer class="version">{ payload.version.clone() }</footer> }
                }
            }
        </div>
    }
}
