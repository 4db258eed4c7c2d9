use brand_support::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
