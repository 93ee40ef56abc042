use std::sync::Mutex;

use vault_client::{
    contracts::{
        cake_vault,
        ifo,
        masterchef,
        pottery,
        psp22,
    },
    Notifier,
};
use vault_trait::Address;

pub const ALICE: Address = Address::repeat_byte(0xa1);
pub const BOB: Address = Address::repeat_byte(0xb0);

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn cake_vault() -> cake_vault::Instance {
    Address::repeat_byte(1).into()
}

pub fn masterchef() -> masterchef::Instance {
    Address::repeat_byte(2).into()
}

pub fn ifo() -> ifo::Instance {
    Address::repeat_byte(3).into()
}

pub fn pottery() -> pottery::Instance {
    Address::repeat_byte(4).into()
}

pub fn cake() -> psp22::Instance {
    Address::repeat_byte(5).into()
}

/// 18-decimal fixed-point value of `whole` tokens.
pub fn tokens(whole: u64) -> vault_trait::U256 {
    vault_trait::U256::from(whole) * vault_trait::U256::exp10(18)
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub errors: Mutex<Vec<String>>,
    pub successes: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn successes(&self) -> Vec<String> {
        self.successes.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn toast_error(&self, title: &str, description: &str) {
        self.errors.lock().unwrap().push(format!("{title}: {description}"));
    }

    fn toast_success(&self, title: &str, description: &str) {
        self.successes.lock().unwrap().push(format!("{title}: {description}"));
    }
}
