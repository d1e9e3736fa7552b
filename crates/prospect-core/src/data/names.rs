// Built-in first/last name pools.

use std::collections::BTreeMap;

use super::NamePool;

const FIRST_NA: &[&str] = &[
    "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph", "Thomas",
    "Charles", "Christopher", "Daniel", "Matthew", "Anthony", "Mark", "Donald", "Steven", "Paul",
    "Andrew", "Joshua", "Kevin", "Brian", "George", "Edward", "Ronald", "Timothy", "Jason",
    "Jeffrey", "Ryan", "Jacob", "Gary", "Nicholas", "Eric", "Jonathan", "Stephen", "Larry",
    "Justin", "Scott", "Brandon", "Benjamin", "Samuel", "Frank", "Gregory", "Raymond",
    "Alexander", "Patrick", "Jack", "Dennis", "Jerry", "Tyler", "Aaron", "Marcus", "Darius",
    "Jalen", "Trey", "DeAndre", "Malik", "Jamal", "Cameron", "Isaiah", "Xavier", "Terrell",
];

const LAST_NA: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores", "Green", "Adams", "Nelson", "Baker", "Hall",
    "Rivera", "Campbell", "Mitchell", "Carter", "Roberts", "Washington", "Brooks", "Coleman",
    "Jenkins", "Bryant", "Simmons", "Henderson", "Griffin", "Hayes", "Bell",
];

const POOLS: &[(&str, &[&str], &[&str])] = &[
    (
        "french",
        &["Jean", "Pierre", "Louis", "Nicolas", "Antoine", "Hugo", "Lucas", "Julien", "Mathieu", "Théo"],
        &["Dubois", "Durand", "Lefevre", "Moreau", "Laurent", "Simon", "Michel", "Garnier", "Petit", "Roux"],
    ),
    (
        "spanish",
        &["Alejandro", "Carlos", "Diego", "Javier", "Manuel", "Luis", "Miguel", "Pablo", "Sergio", "Raúl"],
        &["García", "Martínez", "López", "Sánchez", "Pérez", "Gómez", "Martín", "Jiménez", "Ruiz", "Hernández"],
    ),
    (
        "german",
        &["Lukas", "Leon", "Finn", "Noah", "Elias", "Paul", "Jonas", "Felix", "Maximilian", "Moritz"],
        &["Müller", "Schmidt", "Schneider", "Fischer", "Weber", "Meyer", "Wagner", "Becker", "Hoffmann", "Koch"],
    ),
    (
        "italian",
        &["Lorenzo", "Andrea", "Matteo", "Giovanni", "Alessandro", "Marco", "Francesco", "Paolo", "Gabriele", "Stefano"],
        &["Rossi", "Russo", "Ferrari", "Esposito", "Bianchi", "Romano", "Colombo", "Ricci", "Marino", "Greco"],
    ),
    (
        "japanese",
        &["Haruto", "Ren", "Yuto", "Sota", "Itsuki", "Daiki", "Ryusei", "Tsubasa", "Kaito", "Sho"],
        &["Sato", "Suzuki", "Takahashi", "Tanaka", "Watanabe", "Ito", "Yamamoto", "Nakamura", "Kobayashi", "Matsumoto"],
    ),
    (
        "australian",
        &["Jack", "Oliver", "William", "Noah", "James", "Lucas", "Ethan", "Liam", "Thomas", "Harrison"],
        &["Smith", "Jones", "Williams", "Brown", "Taylor", "Wilson", "Johnson", "White", "Martin", "Anderson"],
    ),
    (
        "portuguese",
        &["João", "Gabriel", "Lucas", "Mateus", "Pedro", "Rafael", "Thiago", "Felipe", "Bruno", "Gustavo"],
        &["Silva", "Santos", "Oliveira", "Souza", "Rodrigues", "Ferreira", "Almeida", "Costa", "Gomes", "Martins"],
    ),
    (
        "chinese",
        &["Wei", "Jun", "Hao", "Lei", "Feng", "Ming", "Peng", "Tao", "Jian", "Chen"],
        &["Wang", "Li", "Zhang", "Liu", "Chen", "Yang", "Huang", "Zhao", "Wu", "Zhou"],
    ),
    (
        "nigerian",
        &["Emeka", "Chinedu", "Ifeanyi", "Tunde", "Kelechi", "Chukwuemeka", "Uche", "Obinna", "Segun", "Kunle"],
        &["Okafor", "Balogun", "Adeyemi", "Eze", "Olawale", "Ibrahim", "Okoro", "Abiola", "Ogunleye", "Nwosu"],
    ),
    (
        "russian",
        &["Ivan", "Dmitry", "Sergey", "Alexey", "Nikolay", "Andrey", "Mikhail", "Vladimir", "Pavel", "Yuri"],
        &["Ivanov", "Petrov", "Sidorov", "Smirnov", "Kuznetsov", "Popov", "Volkov", "Fedorov", "Orlov", "Morozov"],
    ),
];

const FIRST_INTL_GENERIC: &[&str] = &[
    "Luka", "Nikola", "Giannis", "Domantas", "Bogdan", "Dario", "Kostas", "Mateo", "Adrian",
    "Stefan", "Marko", "Ivica", "Omar", "Yusuf", "Amadou", "Moussa", "Ibrahima", "Pascal",
    "Joel", "Rui", "Kenta", "Min-jun", "Tomas", "Andres",
];

const LAST_INTL_GENERIC: &[&str] = &[
    "Jovic", "Petrovic", "Markovic", "Papadopoulos", "Sabonis", "Kalnietis", "Saric", "Bertans",
    "Diallo", "Ndiaye", "Mbah", "Siakam", "Sow", "Kaya", "Yilmaz", "Hachimura", "Kim", "Park",
    "Novak", "Horvat", "Kovac", "Andersen", "Lindqvist", "Costa",
];

/// Returns (North America pool, keyed pools, generic international pool).
pub(super) fn builtin_pools() -> (NamePool, BTreeMap<String, NamePool>, NamePool) {
    let keyed = POOLS
        .iter()
        .map(|&(id, first, last)| (id.to_string(), NamePool::new(first, last)))
        .collect();
    (
        NamePool::new(FIRST_NA, LAST_NA),
        keyed,
        NamePool::new(FIRST_INTL_GENERIC, LAST_INTL_GENERIC),
    )
}
