//! Recetas de las bebidas: los pasos que cambian entre una bebida y otra.
use std::{fmt, str::FromStr};

use crate::errors::ShopError;

/// Pasos variables del algoritmo de preparacion. Cada uno devuelve la linea que describe lo que se hace.
pub trait RecipeSteps {
    fn name(&self) -> &'static str;
    fn take_cup(&self) -> &'static str;
    fn make_espresso(&self) -> &'static str;
    fn prepare_milk(&self) -> &'static str;
}

pub struct Latte;
pub struct Cappuccino;
pub struct FlatWhite;

impl RecipeSteps for Latte {
    fn name(&self) -> &'static str {
        "Latte"
    }

    fn take_cup(&self) -> &'static str {
        "Берем чашку 300 мл"
    }

    fn make_espresso(&self) -> &'static str {
        "Делаем одинарный эспрессо"
    }

    fn prepare_milk(&self) -> &'static str {
        "Подготавливаем 250 мл молока"
    }
}

impl RecipeSteps for Cappuccino {
    fn name(&self) -> &'static str {
        "Cappuccino"
    }

    fn take_cup(&self) -> &'static str {
        "Берем чашку 200 мл"
    }

    fn make_espresso(&self) -> &'static str {
        "Делаем одинарный эспрессо"
    }

    fn prepare_milk(&self) -> &'static str {
        "Подготавливаем 125 мл молока"
    }
}

impl RecipeSteps for FlatWhite {
    fn name(&self) -> &'static str {
        "FlatWhite"
    }

    fn take_cup(&self) -> &'static str {
        "Берем чашку 200 мл"
    }

    fn make_espresso(&self) -> &'static str {
        "Делаем двойной эспрессо"
    }

    fn prepare_milk(&self) -> &'static str {
        "Подготавливаем 90 мл молока"
    }
}

/// Bebidas del menu, en el orden en que se muestran
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrinkKind {
    Latte,
    Cappuccino,
    FlatWhite,
}

impl DrinkKind {
    pub const ALL: [DrinkKind; 3] = [DrinkKind::Latte, DrinkKind::Cappuccino, DrinkKind::FlatWhite];

    /// Codigo con el que se elige la bebida en el menu
    pub fn code(&self) -> &'static str {
        match self {
            DrinkKind::Latte => "1",
            DrinkKind::Cappuccino => "2",
            DrinkKind::FlatWhite => "3",
        }
    }

    pub fn menu_label(&self) -> &'static str {
        match self {
            DrinkKind::Latte => "Латте",
            DrinkKind::Cappuccino => "Капучино",
            DrinkKind::FlatWhite => "Флэт Уайт",
        }
    }

    pub fn recipe(&self) -> &'static dyn RecipeSteps {
        match self {
            DrinkKind::Latte => &Latte,
            DrinkKind::Cappuccino => &Cappuccino,
            DrinkKind::FlatWhite => &FlatWhite,
        }
    }
}

impl FromStr for DrinkKind {
    type Err = ShopError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        DrinkKind::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| ShopError::UnknownSelection(code.to_string()))
    }
}

impl fmt::Display for DrinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.recipe().name())
    }
}

/// Menu que se muestra al cliente: una linea `<codigo>.<bebida>` por bebida.
pub fn menu() -> String {
    DrinkKind::ALL
        .iter()
        .map(|kind| format!("{}.{}", kind.code(), kind.menu_label()))
        .collect::<Vec<String>>()
        .join("\n")
}
