pub mod config;
pub mod model;
pub mod repository;
pub mod service;
pub mod usecase;

pub use config::AppConfig;
pub use model::activity::{Activity, Category, RecordedActivity};
pub use model::community::{community_points, leaderboard, seed_members, Badge, Member, RankedMember};
pub use model::daily_footprint::{round2, DailyFootprint};
pub use model::emission::EmissionFactors;
pub use repository::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use service::calculator::calculate_footprint;
pub use service::daily_footprint_service::DailyFootprintService;
pub use service::eco_action_service::{CommunityError, EcoActionService};
pub use service::tracking_service::TrackingService;
pub use usecase::dashboard::DashboardUseCase;
