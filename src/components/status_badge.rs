use yew::prelude::*;

use crate::view::{OutageLine, StateClass};

#[derive(Properties, PartialEq, Clone)]
pub struct StatusBadgeProps {
    pub state: StateClass,
    pub address: String,
    pub outage: Option<OutageLine>,
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    let state_css = props.state.css();
    html! {
        <header class="status-card">
            <div id="status-badge" class={classes!("status-badge", state_css)}>
                <span id="status-dot" class={classes!("status-dot", state_css)}></span>
                <span id="status-text">{ props.state.status_text() }</span>
            </div>
            <div id="address">{ props.address.clone() }</div>
            {
                match &props.outage {
                    Some(line) => html! {
                        <div id="ongoing-duration" class={classes!("outage-note", line.kind.clone())}>
                            { line.text.clone() }
                        </div>
                    },
                    None => html! {},
                }
            }
        </header>
    }
}
