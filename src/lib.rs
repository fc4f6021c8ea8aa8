pub mod adapters;
pub mod conversion;
pub mod error;
pub mod models;
pub mod oxygen;

pub use crate::adapters::teos10::potential_density;
pub use crate::conversion::calculator::{
    convert, convert_many, o2_fresh_to_sal, o2c_to_o2p, o2c_to_o2s, o2p_to_o2c, o2p_to_o2s,
    o2s_to_o2c, o2s_to_o2p, process_request, umol_per_kg_to_umol_per_l,
    umol_per_l_to_umol_per_kg,
};
pub use crate::error::AppError;
pub use crate::models::{Conditions, ConversionOutput, ConversionRequest, Quantity, Sample};
pub use crate::oxygen::{DEFAULT_P_ATM, DEFAULT_P_DBAR};
