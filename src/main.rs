//! CSR entry point. Trunk builds this binary for the browser with the
//! `hydrate` feature enabled; without it the binary is inert.

fn main() {
    #[cfg(feature = "hydrate")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        leptos::mount::mount_to_body(edugenie::app::App);
    }
}
