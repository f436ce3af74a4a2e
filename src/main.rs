mod components;
mod favicon;
mod model;
mod net;
mod util;
mod view;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
