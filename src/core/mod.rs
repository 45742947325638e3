pub mod dispatcher;
pub mod recommender;
pub mod validator;

pub use crate::domain::model::{Recommendation, RiskTier, SlotName, SlotSet, ValidationResult};
pub use crate::domain::ports::{ConfigProvider, IntentHandler};
pub use crate::utils::error::Result;
