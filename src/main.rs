#[cfg(target_arch = "wasm32")]
pub fn main() {
    studybuddy_web::app::start();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
