//! User-triggered operations on [`App`](crate::app::App).
//!
//! Each sub-module adds an `impl App` block for one concern.

pub mod country;
pub mod favorites;

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use globus_net::{CountrySource, NetError};
    use globus_shared::RawCountry;
    use serde_json::json;

    /// Replays scripted fetch results and counts requests.
    pub struct FakeSource {
        calls: AtomicUsize,
        script: Mutex<VecDeque<Result<Vec<RawCountry>, NetError>>>,
    }

    impl FakeSource {
        pub fn new(script: Vec<Result<Vec<RawCountry>, NetError>>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                script: Mutex::new(script.into()),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl CountrySource for FakeSource {
        async fn fetch_countries(&self) -> Result<Vec<RawCountry>, NetError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(NetError::Status(500)))
        }
    }

    pub fn countries(names: &[&str]) -> Vec<RawCountry> {
        names
            .iter()
            .map(|n| {
                RawCountry(json!({
                    "name": { "common": n },
                    "capital": [format!("{n} City")],
                    "population": 1000,
                    "flags": { "png": format!("https://flags.test/{n}.png") }
                }))
            })
            .collect()
    }
}
