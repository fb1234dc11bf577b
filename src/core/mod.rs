pub mod errors;
pub mod types;

pub use errors::{Error, Result, ResultExt};
pub use types::{
    Cluster, Element, ElementBalance, HemisphereBalance, Modality, ModalityBalance, PatternSubType,
    PatternType, PlanetPosition, ShapePattern,
};
