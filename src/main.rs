pub mod brew;
pub mod constants;
pub mod errors;
pub mod facade;
pub mod logger;
pub mod recipe;
pub mod worker;

use std::io::{self, BufRead};

use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;

use constants::{BARISTA_NAME, GREETING, LOG_FILE_PATH};
use errors::ShopError;
use facade::ServiceFacade;
use logger::{FileSink, Logger};
use worker::{Barista, DrinkOutcome};

fn main() {
    if let Err(err) = SimpleLogger::new().with_level(LevelFilter::Warn).env().init() {
        eprintln!("Could not start the logger: {}", err);
    }

    if let Err(err) = serve_one_customer() {
        error!("[SHOP] {}", err);
        std::process::exit(1);
    }
}

fn serve_one_customer() -> Result<(), ShopError> {
    let sink = FileSink::new(LOG_FILE_PATH);
    let barista = Barista::new(BARISTA_NAME, Logger::instance(), &sink);
    let facade = ServiceFacade::new(barista);

    println!("{}", GREETING);
    println!("{}", recipe::menu());
    let code = read_selection(io::stdin().lock())?;

    match facade.complete_service(&code)? {
        DrinkOutcome::Brewed(kind) => info!("[SHOP] Served a {}", kind),
        DrinkOutcome::UnknownSelection(code) => info!("[SHOP] Nothing served for {:?}", code),
    }
    Ok(())
}

/// Lee una linea sin el fin de linea. Sin entrada devuelve una seleccion vacia.
/// Los bytes que no son UTF-8 se reemplazan, la seleccion no se valida aca.
fn read_selection<R: BufRead>(mut input: R) -> Result<String, ShopError> {
    let mut bytes = Vec::new();
    input.read_until(b'\n', &mut bytes).map_err(ShopError::InputError)?;
    let mut line = String::from_utf8_lossy(&bytes).into_owned();
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
