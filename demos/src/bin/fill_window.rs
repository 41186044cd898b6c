use backend::logger::{self, LogFacade};
use backend::system::System;
use backend::Demo;

fn main() {
    logger::init();
    if let Err(e) = backend::run(System::init, &Demo::fill(), &LogFacade) {
        log::error!("Application error: {e}");
        log::error!("SDL error: {}", sdl2::get_error());
        std::process::exit(1);
    }
}
