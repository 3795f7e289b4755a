//! Empleados de la cafeteria.
use log::{info, warn};

use crate::{
    brew::brew,
    errors::ShopError,
    logger::{LogSink, Logger},
    recipe::DrinkKind,
};

/// Resultado de pedirle una bebida a un empleado
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrinkOutcome {
    Brewed(DrinkKind),
    UnknownSelection(String),
}

/// Lo que sabe hacer cualquier empleado que atiende el mostrador.
pub trait Employee {
    fn name(&self) -> &str;
    fn make_drink(&self, code: &str) -> Result<DrinkOutcome, ShopError>;
    fn clean_tables(&self) -> Result<(), ShopError>;
}

pub struct Barista<'a> {
    name: String,
    logger: &'a Logger,
    sink: &'a dyn LogSink,
}

impl<'a> Barista<'a> {
    pub fn new(name: &str, logger: &'a Logger, sink: &'a dyn LogSink) -> Barista<'a> {
        Barista {
            name: name.to_string(),
            logger,
            sink,
        }
    }
}

impl Employee for Barista<'_> {
    fn name(&self) -> &str {
        &self.name
    }

    /// Registra que toma el pedido y prepara la bebida del codigo.
    /// Un codigo desconocido no prepara nada y se informa en el resultado.
    fn make_drink(&self, code: &str) -> Result<DrinkOutcome, ShopError> {
        let message = format!("Бариста {} берется за приготовление напитка", self.name);
        self.logger.log(&message, self.sink)?;

        let kind = match code.parse::<DrinkKind>() {
            Ok(kind) => kind,
            Err(_) => {
                warn!("[BARISTA {}] Unknown selection {:?}, nothing to brew", self.name, code);
                return Ok(DrinkOutcome::UnknownSelection(code.to_string()));
            }
        };
        info!("[BARISTA {}] Brewing a {}", self.name, kind);
        brew(kind.recipe(), self.logger, self.sink)?;
        Ok(DrinkOutcome::Brewed(kind))
    }

    fn clean_tables(&self) -> Result<(), ShopError> {
        let message = format!("Бариста {} протирает столы", self.name);
        self.logger.log(&message, self.sink)?;
        info!("[BARISTA {}] Tables cleaned", self.name);
        Ok(())
    }
}
