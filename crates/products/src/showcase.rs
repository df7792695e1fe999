//! Fixed showcase list served independently of the store.
//!
//! These entries are not catalog records: their ids are plain strings and they
//! never appear in `read_all`.

/// A read-only showcase entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowcaseProduct {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub thumbnail_url: &'static str,
    pub quantity: i64,
    pub price: f64,
}

const HASWELL_I5: &str = "3.0GHz Dual-core Haswell Intel Core i5 Turbo Boost up to 3.2 GHz, \
3MB L3 cache 8GB (two 4GB SO-DIMMs) of 1600MHz DDR3 SDRAM";

/// The showcase entries, in display order.
pub fn products() -> Vec<ShowcaseProduct> {
    vec![
        ShowcaseProduct {
            id: "1",
            title: "macbook Retina 13.3' ME662 (2013)",
            description: HASWELL_I5,
            thumbnail_url: "https://www.dropbox.com/s/swg9bdr0ejcbtrl/img9.jpg?raw=1",
            quantity: 10,
            price: 2399.0,
        },
        ShowcaseProduct {
            id: "2",
            title: "Macbook Pro 13.3' Retina MF841LL/A",
            description: "Macbook Pro 13.3' Retina MF841LL/A Model 2015 Option Ram Care 12/2016",
            thumbnail_url: "https://www.dropbox.com/s/6tqcep7rk29l59e/img2.jpeg?raw=1",
            quantity: 15,
            price: 1199.0,
        },
        ShowcaseProduct {
            id: "3",
            title: "Macbook Pro 15.4' Retina MC975LL/A Model 2012",
            description: HASWELL_I5,
            thumbnail_url: "https://www.dropbox.com/s/78fot6w894stu3n/img3.jpg?raw=1",
            quantity: 1,
            price: 1800.0,
        },
    ]
}
