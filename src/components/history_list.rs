use yew::prelude::*;

use crate::view::HistoryRow;

#[derive(Properties, PartialEq, Clone)]
pub struct HistoryListProps {
    /// Card tint follows the page state class.
    pub state_css: &'static str,
    pub rows: Vec<HistoryRow>,
}

#[function_component(HistoryList)]
pub fn history_list(props: &HistoryListProps) -> Html {
    html! {
        <section id="history-card" class={classes!("history-card", props.state_css)}>
            <div id="history-list">
                { for props.rows.iter().map(render_row) }
            </div>
        </section>
    }
}

fn render_row(row: &HistoryRow) -> Html {
    html! {
        <div class={classes!("history-row", row.ongoing_off.then_some("ongoing-off"))}>
            <span class={classes!("history-dot", row.state_css, row.ongoing.then_some("ongoing"))}></span>
            <span class="history-times">
            {
                match &row.to_label {
                    Some(to) => html! { { format!("{} → {}", row.from_label, to) } },
                    None => html! {
                        <>
                            { format!("{} ", row.from_label) }
                            <span class={classes!("now-label", row.state_css)}>{ "now" }</span>
                        </>
                    },
                }
            }
            </span>
            {
                match &row.duration {
                    Some(duration) => html! {
                        <span class="history-duration">{ duration.clone() }</span>
                    },
                    None => html! {},
                }
            }
        </div>
    }
}
