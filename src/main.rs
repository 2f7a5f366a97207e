use leptos::mount::mount_to_body;

use thirdeye_web::app::App;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("mounting thirdeye-web");

    mount_to_body(App);
}
