//! Shared test data: a small slice of the Moscow bus network.

use super::TransportCatalogue;
use crate::domain::Coordinates;

const STOPS: &[(&str, f64, f64)] = &[
    ("Tolstopaltsevo", 55.611087, 37.20829),
    ("Marushkino", 55.595884, 37.209755),
    ("Rasskazovka", 55.632761, 37.333324),
    ("Biryulyovo Zapadnoye", 55.574371, 37.6517),
    ("Biryusinka", 55.581065, 37.64839),
    ("Universam", 55.587655, 37.645687),
    ("Biryulyovo Tovarnaya", 55.592028, 37.653656),
    ("Biryulyovo Passazhirskaya", 55.580999, 37.659164),
    ("Rossoshanskaya ulitsa", 55.595579, 37.605757),
    ("Prazhskaya", 55.611678, 37.603831),
];

const DISTANCES: &[(&str, &[(&str, u32)])] = &[
    ("Tolstopaltsevo", &[("Marushkino", 3900)]),
    ("Marushkino", &[("Rasskazovka", 9900), ("Marushkino", 100)]),
    ("Rasskazovka", &[("Marushkino", 9500)]),
    (
        "Biryulyovo Zapadnoye",
        &[
            ("Rossoshanskaya ulitsa", 7500),
            ("Biryusinka", 1800),
            ("Universam", 2400),
        ],
    ),
    ("Biryusinka", &[("Universam", 750)]),
    (
        "Universam",
        &[("Rossoshanskaya ulitsa", 5600), ("Biryulyovo Tovarnaya", 900)],
    ),
    ("Biryulyovo Tovarnaya", &[("Biryulyovo Passazhirskaya", 1300)]),
    ("Biryulyovo Passazhirskaya", &[("Biryulyovo Zapadnoye", 1200)]),
];

/// Routes "256" (circular), "750" (linear) and "828" (circular).
pub(crate) fn reference_catalogue() -> TransportCatalogue {
    let mut cat = TransportCatalogue::new();
    for &(name, lat, lng) in STOPS {
        cat.add_stop(name, Coordinates::new(lat, lng));
    }
    for &(from, neighbours) in DISTANCES {
        cat.add_distances(from, neighbours).unwrap();
    }
    cat.add_route(
        "256",
        true,
        &[
            "Biryulyovo Zapadnoye",
            "Biryusinka",
            "Universam",
            "Biryulyovo Tovarnaya",
            "Biryulyovo Passazhirskaya",
            "Biryulyovo Zapadnoye",
        ],
    )
    .unwrap();
    cat.add_route(
        "750",
        false,
        &["Tolstopaltsevo", "Marushkino", "Marushkino", "Rasskazovka"],
    )
    .unwrap();
    cat.add_route(
        "828",
        true,
        &[
            "Biryulyovo Zapadnoye",
            "Universam",
            "Rossoshanskaya ulitsa",
            "Biryulyovo Zapadnoye",
        ],
    )
    .unwrap();
    cat
}
