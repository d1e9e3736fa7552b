// College and country lists plus the country -> name pool map.

pub(super) const COLLEGES: &[&str] = &[
    "Alabama",
    "Arizona",
    "Arizona State",
    "Arkansas",
    "Auburn",
    "Baylor",
    "Boise State",
    "Boston College",
    "BYU",
    "California",
    "Clemson",
    "Colorado",
    "Duke",
    "Florida",
    "Florida State",
    "Georgetown",
    "Georgia",
    "Gonzaga",
    "Houston",
    "Illinois",
    "Indiana",
    "Iowa",
    "Iowa State",
    "Kansas",
    "Kansas State",
    "Kentucky",
    "LSU",
    "Louisville",
    "Miami",
    "Michigan",
    "Michigan State",
    "Minnesota",
    "Mississippi State",
    "Missouri",
    "North Carolina",
    "NC State",
    "Nebraska",
    "Notre Dame",
    "Ohio State",
    "Oklahoma",
    "Oklahoma State",
    "Ole Miss",
    "Oregon",
    "Penn State",
    "Pittsburgh",
    "Purdue",
    "South Carolina",
    "Stanford",
    "Syracuse",
    "TCU",
    "Tennessee",
    "Texas",
    "Texas A&M",
    "Texas Tech",
    "UCLA",
    "UConn",
    "USC",
    "Utah",
    "Villanova",
    "Virginia",
    "Virginia Tech",
    "Wake Forest",
    "Washington",
    "West Virginia",
    "Wisconsin",
];

pub(super) const COUNTRIES: &[&str] = &[
    "United States",
    "Canada",
    "Mexico",
    "France",
    "Spain",
    "Germany",
    "Italy",
    "Russia",
    "Serbia",
    "Greece",
    "Lithuania",
    "Croatia",
    "Japan",
    "China",
    "South Korea",
    "Nigeria",
    "Cameroon",
    "Senegal",
    "Brazil",
    "Argentina",
    "Australia",
    "New Zealand",
];

/// Countries without an entry fall back to the generic international pool.
pub(super) const COUNTRY_POOLS: &[(&str, &str)] = &[
    ("United States", super::NORTH_AMERICA_POOL),
    ("Canada", super::NORTH_AMERICA_POOL),
    ("Mexico", "spanish"),
    ("France", "french"),
    ("Spain", "spanish"),
    ("Argentina", "spanish"),
    ("Germany", "german"),
    ("Italy", "italian"),
    ("Russia", "russian"),
    ("Japan", "japanese"),
    ("China", "chinese"),
    ("Nigeria", "nigerian"),
    ("Brazil", "portuguese"),
    ("Australia", "australian"),
    ("New Zealand", "australian"),
];
