use rand::Rng;
use serde::{Deserialize, Serialize};

/// Largest temperature the simulated sensor reports.
pub const TEMPERATURE_MAX: u32 = 100;
/// Largest water level the simulated sensor reports.
pub const WATER_LEVEL_MAX: u32 = 200;

// Every reading goes out with this state tag.
const STATE_REPORTING: &str = "reporting";

/// One synthetic sensor reading as it is published to the broker.
///
/// Wire shape: `{"temp": <0-100>, "waterLevel": <0-200>, "state": "reporting"}`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Reading {
    pub temp: u32,
    #[serde(rename = "waterLevel")]
    pub water_level: u32,
    pub state: String,
}

impl Reading {
    pub fn new(temp: u32, water_level: u32) -> Self {
        Self {
            temp,
            water_level,
            state: STATE_REPORTING.to_string(),
        }
    }

    /// Draw a fresh reading with uniformly distributed values.
    pub fn sample(rng: &mut impl Rng) -> Self {
        Self::new(
            rng.gen_range(0..=TEMPERATURE_MAX),
            rng.gen_range(0..=WATER_LEVEL_MAX),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn sampled_values_stay_in_bounds() {
        for seed in 0..8 {
            let mut rng = StdRng::seed_from_u64(seed);

            for _ in 0..10_000 {
                let reading = Reading::sample(&mut rng);
                assert!(reading.temp <= TEMPERATURE_MAX);
                assert!(reading.water_level <= WATER_LEVEL_MAX);
            }
        }
    }

    #[test]
    fn serializes_with_wire_keys() {
        let reading = Reading::new(21, 180);

        let value = serde_json::to_value(&reading).unwrap();
        let map = value.as_object().unwrap();

        // Exactly these keys, nothing more
        assert_eq!(map.len(), 3);
        assert_eq!(map["temp"], 21);
        assert_eq!(map["waterLevel"], 180);
        assert_eq!(map["state"], "reporting");
    }

    #[test]
    fn wire_payload_round_trips() {
        let reading = Reading::new(0, 200);

        let json = serde_json::to_string(&reading).unwrap();
        let parsed: Reading = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, reading);
    }
}
