// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Read-only catalog of barbers and the services they offer.

use std::collections::BTreeMap;
use std::error::Error;
use std::path::Path;

use tokio::fs;

/// A barber in the catalog.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Barber {
    /// Catalog id.
    pub id: u32,

    /// Display name.
    pub name: String,

    /// Experience label, e.g. "5 years".
    pub experience: String,

    /// Portrait URL.
    #[serde(default)]
    pub image: String,

    /// Short biography.
    pub bio: String,

    /// Average rating out of 5.
    pub rating: f32,
}

/// A service offered by one barber.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// Catalog id.
    pub id: u32,

    /// Id of the barber offering it.
    pub barber_id: u32,

    /// Display name.
    pub name: String,

    /// Price label, e.g. "$25".
    pub price: String,

    /// Duration label, e.g. "30 minutes".
    pub duration: String,

    /// Longer description.
    pub description: String,
}

/// Lookup tables of barbers and services, keyed by id.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(from = "CatalogRaw")]
pub struct Catalog {
    barbers: BTreeMap<u32, Barber>,
    services: BTreeMap<u32, Service>,
}

#[derive(Debug, serde::Deserialize)]
struct CatalogRaw {
    barbers: Vec<Barber>,
    services: Vec<Service>,
}

impl From<CatalogRaw> for Catalog {
    fn from(raw: CatalogRaw) -> Self {
        Catalog::new(raw.barbers, raw.services)
    }
}

impl Catalog {
    /// Builds a catalog, later entries win on duplicate ids.
    pub fn new(
        barbers: impl IntoIterator<Item = Barber>,
        services: impl IntoIterator<Item = Service>,
    ) -> Self {
        Self {
            barbers: barbers.into_iter().map(|b| (b.id, b)).collect(),
            services: services.into_iter().map(|s| (s.id, s)).collect(),
        }
    }

    /// Loads a catalog from a JSON file with `barbers` and `services` arrays.
    #[tracing::instrument]
    pub async fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read catalog {}: {e}", path.display()))?;
        let catalog: Catalog = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse catalog {}: {e}", path.display()))?;
        tracing::debug!(
            barbers = catalog.barbers.len(),
            services = catalog.services.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// All barbers, ordered by id.
    pub fn barbers(&self) -> impl Iterator<Item = &Barber> {
        self.barbers.values()
    }

    /// All services, ordered by id.
    pub fn services(&self) -> impl Iterator<Item = &Service> {
        self.services.values()
    }

    /// Looks up a barber.
    #[must_use]
    pub fn barber(&self, id: u32) -> Option<&Barber> {
        self.barbers.get(&id)
    }

    /// Looks up a service.
    #[must_use]
    pub fn service(&self, id: u32) -> Option<&Service> {
        self.services.get(&id)
    }

    /// Services offered by the given barber, ordered by id.
    pub fn services_for_barber(&self, barber_id: u32) -> impl Iterator<Item = &Service> {
        self.services
            .values()
            .filter(move |s| s.barber_id == barber_id)
    }

    /// The catalog shipped with the app.
    #[must_use]
    pub fn builtin() -> Self {
        fn barber(
            id: u32,
            name: &str,
            experience: &str,
            photo: &str,
            bio: &str,
            rating: f32,
        ) -> Barber {
            Barber {
                id,
                name: name.to_string(),
                experience: experience.to_string(),
                image: format!("https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg"),
                bio: bio.to_string(),
                rating,
            }
        }

        fn service(
            id: u32,
            barber_id: u32,
            name: &str,
            price: &str,
            duration: &str,
            description: &str,
        ) -> Service {
            Service {
                id,
                barber_id,
                name: name.to_string(),
                price: price.to_string(),
                duration: duration.to_string(),
                description: description.to_string(),
            }
        }

        let barbers = [
            barber(
                1,
                "Raj Singh",
                "5 years",
                "1805600",
                "Specializes in modern cuts and styling techniques. Known for precision and attention to detail.",
                4.8,
            ),
            barber(
                2,
                "Amit Verma",
                "3 years",
                "1319460",
                "Expert in traditional barbering methods combined with contemporary styles.",
                4.6,
            ),
            barber(
                3,
                "Michael Rodriguez",
                "7 years",
                "1878687",
                "Award-winning barber specializing in fades, designs, and beard sculpting.",
                4.9,
            ),
            barber(
                4,
                "David Thompson",
                "4 years",
                "2531550",
                "Innovative stylist who stays current with the latest trends and techniques.",
                4.5,
            ),
        ];

        #[rustfmt::skip]
        let services = [
            service(1, 1, "Classic Haircut", "$25", "30 minutes", "A traditional haircut including a consultation, shampoo, and style."),
            service(2, 1, "Beard Trim", "$15", "15 minutes", "Professional beard shaping and trimming for a clean, defined look."),
            service(3, 1, "Haircut & Beard Combo", "$35", "45 minutes", "Complete package including haircut and beard trim for a refreshed look."),
            service(4, 2, "Premium Haircut", "$30", "35 minutes", "Precision cut with extra attention to detail and styling."),
            service(5, 2, "Beard Styling", "$18", "20 minutes", "Expert beard shaping with hot towel treatment."),
            service(6, 3, "Signature Fade", "$28", "30 minutes", "Specialized fade haircut with precise blending and styling."),
            service(7, 3, "Hot Towel Shave", "$22", "25 minutes", "Traditional straight razor shave with hot towel preparation."),
            service(8, 4, "Express Haircut", "$20", "20 minutes", "Quick and efficient haircut for those on a tight schedule."),
            service(9, 4, "Hair & Scalp Treatment", "$35", "40 minutes", "Revitalizing treatment to nourish hair and scalp."),
        ];

        Self::new(barbers, services)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
