//! The embedded flight dataset.
//!
//! Four flyers spanning roughly two orders of magnitude in mass: two bees, a
//! butterfly and a hummingbird. The table is kept as JSON text so the column
//! names match the source table exactly.

use crate::domain::Flyer;
use crate::error::{AppError, EXIT_DATA};

const FLYERS_JSON: &str = r#"
[
  {"name":"Honey bee (worker)","species":"Apis mellifera","MTOW_g":0.10,"Wingweight_g":0.0015,"Wingspan_mm":18.0,"Wingbeat_Hz":230.0,"Power_W":0.0575},
  {"name":"Bumblebee (worker)","species":"Bombus impatiens","MTOW_g":0.200,"Wingweight_g":0.00104,"Wingspan_mm":26.0,"Wingbeat_Hz":173.0,"Power_W":0.132},
  {"name":"Monarch butterfly","species":"Danaus plexippus","MTOW_g":0.50,"Wingweight_g":0.035,"Wingspan_mm":100.0,"Wingbeat_Hz":9.0,"Power_W":0.116},
  {"name":"Ruby-throated hummingbird","species":"Archilochus colubris","MTOW_g":3.4,"Wingweight_g":0.170,"Wingspan_mm":90.0,"Wingbeat_Hz":53.0,"Power_W":0.27}
]
"#;

/// Parse the embedded dataset.
pub fn load_flyers() -> Result<Vec<Flyer>, AppError> {
    parse_flyers(FLYERS_JSON)
}

fn parse_flyers(json: &str) -> Result<Vec<Flyer>, AppError> {
    let flyers: Vec<Flyer> = serde_json::from_str(json)
        .map_err(|e| AppError::new(EXIT_DATA, format!("Invalid flyer dataset: {e}")))?;
    if flyers.is_empty() {
        return Err(AppError::new(EXIT_DATA, "Flyer dataset is empty."));
    }
    Ok(flyers)
}
