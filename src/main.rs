use rewards_miniapp::app::App;
use rewards_miniapp::utils::panic_hook;

fn main() {
    panic_hook::init();
    leptos::mount_to_body(App);
}
