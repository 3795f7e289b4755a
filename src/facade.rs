//! Punto de entrada simple al servicio completo de un empleado.
use log::debug;

use crate::{
    errors::ShopError,
    worker::{DrinkOutcome, Employee},
};

pub struct ServiceFacade<E: Employee> {
    employee: E,
}

impl<E: Employee> ServiceFacade<E> {
    pub fn new(employee: E) -> ServiceFacade<E> {
        ServiceFacade { employee }
    }

    /// Prepara la bebida pedida y despues limpia las mesas, aunque no se haya preparado nada.
    pub fn complete_service(&self, code: &str) -> Result<DrinkOutcome, ShopError> {
        let outcome = self.employee.make_drink(code)?;
        debug!("[FACADE] {} finished the order: {:?}", self.employee.name(), outcome);
        self.employee.clean_tables()?;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        logger::{fixed_clock, FailingSink, FileSink, Logger, MemorySink},
        recipe::DrinkKind,
        worker::Barista,
    };

    const TAKES_ON: &str = "Бариста Иван берется за приготовление напитка";
    const WIPES: &str = "Бариста Иван протирает столы";

    #[test]
    fn should_log_the_full_service_for_a_latte() {
        let sink = MemorySink::new();
        let logger = Logger::new();
        let facade = ServiceFacade::new(Barista::new("Иван", &logger, &sink));

        let outcome = facade.complete_service("1").unwrap();

        assert_eq!(DrinkOutcome::Brewed(DrinkKind::Latte), outcome);
        assert_eq!(
            vec![
                TAKES_ON,
                "Начинаем готовить напиток!",
                "Берем чашку 300 мл",
                "Делаем одинарный эспрессо",
                "Подготавливаем 250 мл молока",
                "Вливаем молоко, готово!",
                WIPES
            ],
            sink.messages()
        );
    }

    #[test]
    fn should_log_seven_entries_for_every_known_code() {
        for kind in DrinkKind::ALL {
            let sink = MemorySink::new();
            let logger = Logger::new();
            let facade = ServiceFacade::new(Barista::new("Иван", &logger, &sink));

            facade.complete_service(kind.code()).unwrap();

            let messages = sink.messages();
            let recipe = kind.recipe();
            assert_eq!(7, messages.len());
            assert_eq!(TAKES_ON, messages[0]);
            assert_eq!("Начинаем готовить напиток!", messages[1]);
            assert_eq!(recipe.take_cup(), messages[2]);
            assert_eq!(recipe.make_espresso(), messages[3]);
            assert_eq!(recipe.prepare_milk(), messages[4]);
            assert_eq!("Вливаем молоко, готово!", messages[5]);
            assert_eq!(WIPES, messages[6]);
        }
    }

    #[test]
    fn should_still_clean_when_the_code_is_unknown() {
        for code in ["4", "", "abc"] {
            let sink = MemorySink::new();
            let logger = Logger::new();
            let facade = ServiceFacade::new(Barista::new("Иван", &logger, &sink));

            let outcome = facade.complete_service(code).unwrap();

            assert_eq!(DrinkOutcome::UnknownSelection(code.to_string()), outcome);
            assert_eq!(vec![TAKES_ON, WIPES], sink.messages());
        }
    }

    #[test]
    fn should_append_twice_the_entries_when_called_twice() {
        let sink = MemorySink::new();
        let logger = Logger::with_clock(fixed_clock);
        let facade = ServiceFacade::new(Barista::new("Иван", &logger, &sink));

        facade.complete_service("2").unwrap();
        let first_call = sink.contents();
        facade.complete_service("2").unwrap();

        assert_eq!(14, sink.messages().len());
        assert_eq!(format!("{}{}", first_call, first_call), sink.contents());
    }

    #[test]
    fn should_not_clean_when_the_drink_could_not_be_logged() {
        let sink = FailingSink::failing_after(3);
        let logger = Logger::new();
        let facade = ServiceFacade::new(Barista::new("Иван", &logger, &sink));

        let result = facade.complete_service("1");

        assert_eq!(true, matches!(result, Err(ShopError::SinkError(_))));
        assert_eq!(false, sink.messages().contains(&WIPES.to_string()));
    }

    #[test]
    fn should_write_the_service_to_the_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSink::new(dir.path().join("log.txt"));
        let facade = ServiceFacade::new(Barista::new("Иван", Logger::instance(), &sink));

        facade.complete_service("3").unwrap();

        let contents = std::fs::read_to_string(sink.path()).unwrap();
        assert_eq!(7, contents.matches("\r\nLog Entry : ").count());
        assert_eq!(true, contents.contains("\n  :Подготавливаем 90 мл молока\n"));
        assert_eq!(true, contents.ends_with("  :Бариста Иван протирает столы\n-------------------------------\n"));
    }
}
