// Brand portfolio shown on the home page.
//
// Brands arrive as a flat list and are grouped by their holding,
// holdings keep the order in which they were first seen.

use yew::AttrValue;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerificationStatus {
    Verified,
    Rejected,
    Pending,
}

impl VerificationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::Rejected => "not owned",
            Self::Pending => "pending",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Verified => "#22c55e",
            Self::Rejected => "#ef4444",
            Self::Pending => "#eab308",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Brand {
    pub name: AttrValue,
    pub holding_name: AttrValue,
    pub status: Option<VerificationStatus>,
    pub last_verified: Option<AttrValue>,
}

impl Brand {
    pub fn new(name: &'static str, holding_name: &'static str) -> Self {
        Self {
            name: AttrValue::Static(name),
            holding_name: AttrValue::Static(holding_name),
            status: None,
            last_verified: None,
        }
    }

    fn verified(mut self, status: VerificationStatus, on: &'static str) -> Self {
        self.status = Some(status);
        self.last_verified = Some(AttrValue::Static(on));
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Holding {
    pub name: AttrValue,
    pub brands: Vec<Brand>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub verified: usize,
    pub total: usize,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum PortfolioError {
    #[error("brand {brand:?} is not listed under {holding:?}")]
    UnknownBrand { holding: String, brand: String },
}

pub fn group_by_holding(brands: Vec<Brand>) -> Vec<Holding> {
    let mut holdings: Vec<Holding> = Vec::new();
    for brand in brands {
        match holdings
            .iter_mut()
            .find(|holding| holding.name == brand.holding_name)
        {
            Some(holding) => holding.brands.push(brand),
            None => holdings.push(Holding {
                name: brand.holding_name.clone(),
                brands: vec![brand],
            }),
        }
    }
    holdings
}

pub fn summary(holdings: &[Holding]) -> Summary {
    let brands = holdings.iter().flat_map(|holding| holding.brands.iter());
    let (verified, total) = brands.fold((0, 0), |(verified, total), brand| {
        let ok = brand.status == Some(VerificationStatus::Verified);
        (verified + usize::from(ok), total + 1)
    });
    Summary { verified, total }
}

// Marks the brand as awaiting verification.
pub fn request_verification(
    holdings: &mut [Holding],
    holding: &str,
    brand: &str,
) -> Result<(), PortfolioError> {
    let found = holdings
        .iter_mut()
        .filter(|h| h.name.as_str() == holding)
        .flat_map(|h| h.brands.iter_mut())
        .find(|b| b.name.as_str() == brand);

    match found {
        Some(brand) => {
            brand.status = Some(VerificationStatus::Pending);
            Ok(())
        }
        None => Err(PortfolioError::UnknownBrand {
            holding: holding.to_owned(),
            brand: brand.to_owned(),
        }),
    }
}

pub fn portfolio() -> Vec<Holding> {
    use VerificationStatus::*;

    group_by_holding(vec![
        Brand::new("Nespresso", "Nestlé").verified(Verified, "2024-11-04"),
        Brand::new("KitKat", "Nestlé").verified(Verified, "2024-11-04"),
        Brand::new("Perrier", "Nestlé"),
        Brand::new("Dove", "Unilever").verified(Verified, "2024-10-28"),
        Brand::new("Ben & Jerry's", "Unilever").verified(Rejected, "2024-10-28"),
        Brand::new("Lipton", "Unilever").verified(Rejected, "2024-10-28"),
        Brand::new("Oreo", "Mondelēz").verified(Verified, "2024-11-12"),
        Brand::new("Milka", "Mondelēz"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_by_holding_keeps_first_seen_order() {
        let holdings = group_by_holding(vec![
            Brand::new("a", "H1"),
            Brand::new("b", "H2"),
            Brand::new("c", "H1"),
        ]);

        let names: Vec<_> = holdings.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["H1", "H2"]);

        let h1: Vec<_> = holdings[0].brands.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(h1, vec!["a", "c"]);
    }

    #[test]
    fn test_summary_counts_only_verified() {
        let holdings = portfolio();

        assert_eq!(
            summary(&holdings),
            Summary {
                verified: 4,
                total: 8
            }
        );
        assert_eq!(summary(&[]), Summary { verified: 0, total: 0 });
    }

    #[test]
    fn test_request_verification() {
        let mut holdings = portfolio();

        assert_eq!(request_verification(&mut holdings, "Nestlé", "Perrier"), Ok(()));

        let perrier = holdings[0]
            .brands
            .iter()
            .find(|b| b.name.as_str() == "Perrier")
            .unwrap();
        assert_eq!(perrier.status, Some(VerificationStatus::Pending));
    }

    #[test]
    fn test_request_verification_of_brand_under_wrong_holding() {
        let mut holdings = portfolio();
        let before = holdings.clone();

        assert_eq!(
            request_verification(&mut holdings, "Unilever", "Perrier"),
            Err(PortfolioError::UnknownBrand {
                holding: "Unilever".into(),
                brand: "Perrier".into(),
            })
        );
        assert_eq!(holdings, before);
    }
}
