use card_analysis_frontend::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
