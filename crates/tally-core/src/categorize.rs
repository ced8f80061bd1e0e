//! Keyword-based transaction categorization
//!
//! Each rule is a category label paired with a set of literal keywords.
//! Rules are checked top to bottom against the upper-cased description and
//! the first rule with any keyword contained in it wins. Several keywords
//! appear under more than one category ("GAS", "FOOD", "HOTEL", "TRAIN",
//! "BUS"); those resolve to whichever category is listed first.

use crate::models::OTHER_CATEGORY;

/// A classifier rule: category label and the keywords that select it
pub type CategoryRule = (&'static str, &'static [&'static str]);

/// Classifier rules in priority order
pub static CATEGORY_RULES: &[CategoryRule] = &[
    (
        "Groceries",
        &[
            "GROCERY",
            "SUPERMARKET",
            "FOOD",
            "VEGETABLE",
            "FRUIT",
            "MILK",
            "BREAD",
            "RICE",
            "DAL",
            "OIL",
            "SPICE",
            "KIRANA",
            "GENERAL STORE",
            "BIG BAZAAR",
            "BIGBAZAAR",
            "RELIANCE FRESH",
            "DMART",
            "GROFERS",
            "BIGBASKET",
        ],
    ),
    (
        "Utilities",
        &[
            "ELECTRICITY",
            "POWER",
            "GAS",
            "WATER",
            "INTERNET",
            "PHONE",
            "MOBILE",
            "BROADBAND",
            "WIFI",
            "UTILITY",
            "BILL",
            "PAYMENT",
            "BSNL",
            "AIRTEL",
            "JIO",
            "VODAFONE",
            "IDEA",
            "MTNL",
        ],
    ),
    (
        "Rent",
        &["RENT", "HOUSE RENT", "ACCOMMODATION", "LEASE", "RENTAL"],
    ),
    (
        "Entertainment",
        &[
            "MOVIE",
            "CINEMA",
            "NETFLIX",
            "AMAZON PRIME",
            "HOTSTAR",
            "ENTERTAINMENT",
            "GAME",
            "GAMING",
            "PLAYSTATION",
            "XBOX",
            "NINTENDO",
            "BOOK",
            "MAGAZINE",
            "NEWSPAPER",
            "MUSIC",
            "SPOTIFY",
            "YOUTUBE",
            "STREAMING",
        ],
    ),
    (
        "Transportation",
        &[
            "PETROL",
            "DIESEL",
            "FUEL",
            "GAS",
            "UBER",
            "OLA",
            "TAXI",
            "BUS",
            "TRAIN",
            "METRO",
            "PARKING",
            "TOLL",
            "TRANSPORT",
            "CAB",
            "AUTO",
            "PETROL PUMP",
            "HP",
            "SHELL",
            "BP",
            "INDIAN OIL",
        ],
    ),
    (
        "Dining",
        &[
            "RESTAURANT",
            "CAFE",
            "FOOD",
            "MEAL",
            "LUNCH",
            "DINNER",
            "BREAKFAST",
            "SWIGGY",
            "ZOMATO",
            "FOODPANDA",
            "DOMINOS",
            "PIZZA HUT",
            "KFC",
            "MCDONALDS",
            "SUBWAY",
            "CAFETERIA",
            "CANTEEN",
            "HOTEL",
            "BAR",
            "PUB",
        ],
    ),
    (
        "Shopping",
        &[
            "AMAZON",
            "FLIPKART",
            "MYNTRA",
            "SHOPPING",
            "PURCHASE",
            "MALL",
            "SHOP",
            "RETAIL",
            "CLOTHING",
            "FASHION",
            "SHOES",
            "ELECTRONICS",
            "APPLIANCES",
            "FURNITURE",
            "DECOR",
            "LIFESTYLE",
            "JABONG",
            "SNAPDEAL",
            "PAYTM MALL",
            "TATA CLIQ",
            "NYKAA",
            "LENSKART",
        ],
    ),
    (
        "Healthcare",
        &[
            "HOSPITAL",
            "DOCTOR",
            "MEDICAL",
            "PHARMACY",
            "MEDICINE",
            "HEALTH",
            "CLINIC",
            "DENTAL",
            "SURGERY",
            "AMBULANCE",
            "APOLLO",
            "FORTIS",
            "MAX HOSPITAL",
            "MEDPLUS",
            "NETMEDS",
            "PRACTO",
            "HEALTHKART",
        ],
    ),
    (
        "Education",
        &[
            "SCHOOL",
            "COLLEGE",
            "UNIVERSITY",
            "EDUCATION",
            "TUITION",
            "FEES",
            "COURSE",
            "TRAINING",
            "BOOKS",
            "LIBRARY",
            "EXAM",
            "BYJU",
            "UNACADEMY",
            "VEDANTU",
            "STUDENT",
            "ACADEMIC",
        ],
    ),
    (
        "Insurance",
        &[
            "INSURANCE",
            "POLICY",
            "PREMIUM",
            "LIC",
            "HDFC LIFE",
            "ICICI PRU",
            "SBI LIFE",
            "BAJAJ ALLIANZ",
            "TATA AIG",
            "RELIANCE GENERAL",
            "HEALTH INSURANCE",
            "MOTOR INSURANCE",
            "TERM INSURANCE",
        ],
    ),
    (
        "Investment",
        &[
            "MUTUAL FUND",
            "SIP",
            "INVESTMENT",
            "TRADING",
            "ZERODHA",
            "GROWW",
            "ANGEL BROKING",
            "UPSTOX",
            "PAYTM MONEY",
            "KUVERA",
            "STOCK",
            "EQUITY",
            "BOND",
            "FD",
            "RD",
            "PPF",
            "ELSS",
            "NSE",
            "BSE",
        ],
    ),
    (
        "Travel",
        &[
            "IRCTC",
            "MAKEMYTRIP",
            "GOIBIBO",
            "CLEARTRIP",
            "YATRA",
            "TRAVEL",
            "BOOKING",
            "HOTEL",
            "FLIGHT",
            "TRAIN",
            "BUS",
            "TICKET",
            "VACATION",
            "HOLIDAY",
            "TOURISM",
            "AIRBNB",
            "OYO",
            "TREEBO",
            "REDBUS",
        ],
    ),
    (
        "Personal Care",
        &[
            "SALON",
            "PARLOUR",
            "BEAUTY",
            "COSMETICS",
            "SKINCARE",
            "HAIRCUT",
            "MASSAGE",
            "SPA",
            "WELLNESS",
            "FITNESS",
            "GYM",
            "YOGA",
            "PERSONAL CARE",
            "GROOMING",
            "URBAN COMPANY",
            "LAKME",
        ],
    ),
    (
        "Home & Garden",
        &[
            "HOME DEPOT",
            "GARDEN",
            "PLANTS",
            "NURSERY",
            "HARDWARE",
            "TOOLS",
            "REPAIR",
            "MAINTENANCE",
            "PLUMBER",
            "ELECTRICIAN",
            "CARPENTER",
            "PAINT",
            "TILES",
            "CEMENT",
            "CONSTRUCTION",
            "RENOVATION",
        ],
    ),
];

/// Assign a category to a transaction description
///
/// Returns "Other" when no rule matches.
pub fn categorize_transaction(description: &str) -> &'static str {
    let normalized = description.to_uppercase();

    CATEGORY_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| normalized.contains(kw)))
        .map(|(label, _)| *label)
        .unwrap_or(OTHER_CATEGORY)
}
