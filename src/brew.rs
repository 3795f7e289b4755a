//! Algoritmo fijo de preparacion de una bebida.
//!
//! Las etapas siempre se recorren en el mismo orden; solo cambian las lineas que aporta la receta.
use log::debug;

use crate::{
    errors::ShopError,
    logger::{LogSink, Logger},
    recipe::RecipeSteps,
};

pub const START_MESSAGE: &str = "Начинаем готовить напиток!";
pub const POUR_MILK_MESSAGE: &str = "Вливаем молоко, готово!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrewStage {
    Start,
    TakeCup,
    Espresso,
    Milk,
    Pour,
    Done,
}

impl BrewStage {
    pub fn next(&self) -> BrewStage {
        match self {
            BrewStage::Start => BrewStage::TakeCup,
            BrewStage::TakeCup => BrewStage::Espresso,
            BrewStage::Espresso => BrewStage::Milk,
            BrewStage::Milk => BrewStage::Pour,
            BrewStage::Pour => BrewStage::Done,
            BrewStage::Done => BrewStage::Done,
        }
    }
}

/// Prepara la bebida descripta por `steps`, registrando cada etapa.
/// Si falla la escritura del registro se corta en esa etapa.
pub fn brew(steps: &dyn RecipeSteps, logger: &Logger, sink: &dyn LogSink) -> Result<(), ShopError> {
    let mut stage = BrewStage::Start;
    loop {
        debug!("[BREW] {} at stage {:?}", steps.name(), stage);
        match stage {
            BrewStage::Start => logger.log(START_MESSAGE, sink)?,
            BrewStage::TakeCup => announce(steps.take_cup(), logger, sink)?,
            BrewStage::Espresso => announce(steps.make_espresso(), logger, sink)?,
            BrewStage::Milk => announce(steps.prepare_milk(), logger, sink)?,
            BrewStage::Pour => pour_milk(logger, sink)?,
            BrewStage::Done => return Ok(()),
        }
        stage = stage.next();
    }
}

/// Paso comun a todas las recetas.
pub fn pour_milk(logger: &Logger, sink: &dyn LogSink) -> Result<(), ShopError> {
    announce(POUR_MILK_MESSAGE, logger, sink)
}

fn announce(line: &str, logger: &Logger, sink: &dyn LogSink) -> Result<(), ShopError> {
    println!("{}", line);
    logger.log(line, sink)
}
