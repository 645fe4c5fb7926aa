//! Built-in registry of major Indian cities.

use super::{CityRegistry, CityRegistryBuilder};

/// The supported Indian cities, most-travelled first.
pub fn india() -> CityRegistry {
    CityRegistryBuilder::new()
        .add("Mumbai", "Maharashtra")
        .add("Delhi", "Delhi")
        .add("Bangalore", "Karnataka")
        .add("Hyderabad", "Telangana")
        .add("Chennai", "Tamil Nadu")
        .add("Kolkata", "West Bengal")
        .add("Pune", "Maharashtra")
        .add("Ahmedabad", "Gujarat")
        .add("Jaipur", "Rajasthan")
        .add("Lucknow", "Uttar Pradesh")
        .add("Kanpur", "Uttar Pradesh")
        .add("Nagpur", "Maharashtra")
        .add("Indore", "Madhya Pradesh")
        .add("Thane", "Maharashtra")
        .add("Bhopal", "Madhya Pradesh")
        .add("Visakhapatnam", "Andhra Pradesh")
        .add("Vadodara", "Gujarat")
        .add("Coimbatore", "Tamil Nadu")
        .add("Ludhiana", "Punjab")
        .add("Madurai", "Tamil Nadu")
        .build()
}
