//! Per-locale name lookup tables
//!
//! Pure data: immutable, loaded once, never mutated. Each locale maps to one
//! [`LocaleNames`] holding its gendered first-name tables and its surnames.

use crate::types::Country;

/// Name tables for one locale
pub struct LocaleNames {
    pub male_first: &'static [&'static str],
    pub female_first: &'static [&'static str],
    pub last: &'static [&'static str],
}

/// Map a locale tag to its name tables
///
/// The match is exhaustive, so every representable locale is registered.
pub const fn locale_names(country: Country) -> &'static LocaleNames {
    match country {
        Country::England => &ENGLISH_NAMES,
        Country::France => &FRENCH_NAMES,
        Country::Germany => &GERMAN_NAMES,
        Country::Italy => &ITALIAN_NAMES,
        Country::Romania => &ROMANIAN_NAMES,
        Country::SouthAfrica => &SOUTH_AFRICAN_NAMES,
    }
}

pub const ENGLISH_NAMES: LocaleNames = LocaleNames {
    male_first: &[
        "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph",
        "Thomas", "Charles", "Christopher", "Daniel", "Matthew", "Anthony", "Donald", "Mark",
        "Paul", "Steven", "Andrew", "Kenneth", "George", "Joshua", "Kevin", "Brian",
        "Edward", "Ronald", "Timothy", "Jason", "Jeffrey", "Ryan", "Jacob", "Gary",
        "Nicholas", "Eric", "Jonathan", "Stephen", "Larry", "Justin", "Scott", "Brandon",
        "Benjamin", "Samuel", "Gregory", "Frank", "Alexander", "Raymond", "Patrick", "Jack",
        "Dennis", "Jerry", "Tyler", "Aaron", "Henry", "Adam", "Peter", "Nathan",
        "Walter", "Harry", "Barry", "Oliver", "Tom", "Andy",
    ],
    female_first: &[
        "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan", "Jessica",
        "Sarah", "Karen", "Nancy", "Lisa", "Margaret", "Betty", "Sandra", "Ashley",
        "Dorothy", "Kimberly", "Emily", "Donna", "Michelle", "Carol", "Amanda", "Melissa",
        "Deborah", "Stephanie", "Rebecca", "Laura", "Sharon", "Cynthia", "Kathleen", "Amy",
        "Shirley", "Angela", "Helen", "Anna", "Brenda", "Pamela", "Nicole", "Ruth",
        "Katherine", "Samantha", "Christine", "Emma", "Catherine", "Virginia", "Rachel", "Carolyn",
        "Janet", "Maria", "Heather", "Diane", "Julie", "Joyce", "Victoria", "Cindy",
        "Grace", "Rose", "Hannah", "Alice", "Charlotte", "Lucy",
    ],
    last: &[
        "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
        "Wilson", "Anderson", "Taylor", "Thomas", "Moore", "Jackson", "Martin", "Lee",
        "Thompson", "White", "Harris", "Clark", "Lewis", "Robinson", "Walker", "Young",
        "Allen", "King", "Wright", "Scott", "Green", "Baker", "Adams", "Nelson",
        "Hill", "Campbell", "Mitchell", "Roberts", "Carter", "Phillips", "Evans", "Turner",
        "Parker", "Collins", "Edwards", "Stewart", "Morris", "Murphy", "Cook", "Rogers",
        "Morgan", "Peterson", "Cooper", "Reed", "Bailey", "Bell", "Howard", "Ward",
        "Cox", "Richardson", "Wood", "Watson", "Brooks", "Bennett", "Gray", "James",
        "Hughes", "Price", "Wilkinson", "Foster", "Barnes", "Henderson",
    ],
};

pub const FRENCH_NAMES: LocaleNames = LocaleNames {
    male_first: &[
        "Jean", "Pierre", "Michel", "Louis", "Nicolas", "Philippe", "Antoine", "Julien",
        "Francois", "Alain", "Pascal", "Olivier", "Laurent", "Thierry", "Sebastien", "Vincent",
        "Christophe", "Mathieu", "Guillaume", "Etienne", "Henri", "Marcel", "Claude", "Hugo",
        "Lucas", "Theo", "Gabriel", "Arthur", "Maxime", "Romain", "Thomas", "Alexandre",
    ],
    female_first: &[
        "Marie", "Jeanne", "Sophie", "Camille", "Claire", "Julie", "Isabelle", "Nathalie",
        "Catherine", "Sylvie", "Brigitte", "Monique", "Aurelie", "Celine", "Elodie", "Manon",
        "Lea", "Chloe", "Emma", "Louise", "Alice", "Juliette", "Margaux", "Amelie",
        "Charlotte", "Pauline", "Valerie", "Sandrine", "Helene", "Lucie", "Anais", "Oceane",
    ],
    last: &[
        "Martin", "Bernard", "Dubois", "Thomas", "Robert", "Richard", "Petit", "Durand",
        "Leroy", "Moreau", "Simon", "Laurent", "Lefebvre", "Michel", "Garcia", "David",
        "Bertrand", "Roux", "Vincent", "Fournier", "Morel", "Girard", "Andre", "Lefevre",
        "Mercier", "Dupont", "Lambert", "Bonnet", "Francois", "Martinez", "Legrand", "Garnier",
    ],
};

pub const GERMAN_NAMES: LocaleNames = LocaleNames {
    male_first: &[
        "Hans", "Peter", "Klaus", "Wolfgang", "Jurgen", "Dieter", "Manfred", "Uwe",
        "Thomas", "Andreas", "Stefan", "Michael", "Frank", "Markus", "Christian", "Matthias",
        "Alexander", "Florian", "Sebastian", "Tobias", "Daniel", "Felix", "Maximilian", "Lukas",
        "Jonas", "Leon", "Paul", "Finn", "Karl", "Heinz", "Werner", "Gerhard",
    ],
    female_first: &[
        "Ursula", "Monika", "Petra", "Sabine", "Renate", "Karin", "Brigitte", "Andrea",
        "Claudia", "Susanne", "Birgit", "Martina", "Stefanie", "Katrin", "Nicole", "Julia",
        "Anna", "Laura", "Lena", "Katharina", "Sarah", "Lisa", "Hannah", "Sophie",
        "Marie", "Lea", "Emma", "Mia", "Helga", "Ingrid", "Gisela", "Christa",
    ],
    last: &[
        "Muller", "Schmidt", "Schneider", "Fischer", "Weber", "Meyer", "Wagner", "Becker",
        "Schulz", "Hoffmann", "Schafer", "Koch", "Bauer", "Richter", "Klein", "Wolf",
        "Schroder", "Neumann", "Schwarz", "Zimmermann", "Braun", "Kruger", "Hofmann", "Hartmann",
        "Lange", "Schmitt", "Werner", "Krause", "Meier", "Lehmann", "Huber", "Mayer",
    ],
};

pub const ITALIAN_NAMES: LocaleNames = LocaleNames {
    male_first: &[
        "Giuseppe", "Giovanni", "Antonio", "Mario", "Luigi", "Francesco", "Angelo", "Vincenzo",
        "Pietro", "Salvatore", "Carlo", "Franco", "Domenico", "Bruno", "Paolo", "Michele",
        "Giorgio", "Aldo", "Sergio", "Luciano", "Alessandro", "Marco", "Andrea", "Stefano",
        "Roberto", "Luca", "Matteo", "Davide", "Simone", "Federico", "Lorenzo", "Riccardo",
    ],
    female_first: &[
        "Maria", "Anna", "Giuseppina", "Rosa", "Angela", "Giovanna", "Teresa", "Lucia",
        "Carmela", "Caterina", "Francesca", "Antonietta", "Carla", "Elena", "Concetta", "Rita",
        "Margherita", "Franca", "Paola", "Laura", "Giulia", "Chiara", "Sara", "Valentina",
        "Alessia", "Martina", "Federica", "Elisa", "Silvia", "Roberta", "Alessandra", "Sofia",
    ],
    last: &[
        "Rossi", "Russo", "Ferrari", "Esposito", "Bianchi", "Romano", "Colombo", "Ricci",
        "Marino", "Greco", "Bruno", "Gallo", "Conti", "DeLuca", "Mancini", "Costa",
        "Giordano", "Rizzo", "Lombardi", "Moretti", "Barbieri", "Fontana", "Santoro", "Mariani",
        "Rinaldi", "Caruso", "Ferrara", "Galli", "Martini", "Leone", "Longo", "Gentile",
    ],
};

pub const ROMANIAN_NAMES: LocaleNames = LocaleNames {
    male_first: &[
        "Ion", "Andrei", "Mihai", "Alexandru", "Stefan", "Gheorghe", "Vasile", "Nicolae",
        "Constantin", "Florin", "Adrian", "Daniel", "Cristian", "Marius", "Ionut", "Gabriel",
        "Catalin", "Bogdan", "Razvan", "Lucian", "Sorin", "Dragos", "Radu", "Victor",
        "Tudor", "Cosmin", "Valentin", "Sebastian", "Ovidiu", "Doru", "Petre", "Emil",
    ],
    female_first: &[
        "Maria", "Elena", "Ioana", "Ana", "Andreea", "Mihaela", "Gabriela", "Cristina",
        "Daniela", "Alexandra", "Raluca", "Alina", "Monica", "Simona", "Laura", "Roxana",
        "Georgiana", "Adriana", "Carmen", "Diana", "Oana", "Irina", "Bianca", "Camelia",
        "Corina", "Anca", "Teodora", "Madalina", "Larisa", "Florentina", "Iulia", "Sorina",
    ],
    last: &[
        "Popescu", "Ionescu", "Popa", "Stan", "Dumitru", "Stoica", "Gheorghe", "Matei",
        "Constantin", "Marin", "Tudor", "Dobre", "Barbu", "Nistor", "Florea", "Cieslar",
        "Serban", "Munteanu", "Lazar", "Radu", "Preda", "Vasile", "Ilie", "Toma",
        "Moldovan", "Rusu", "Nagy", "Craciun", "Mocanu", "Paun", "Sandu", "Voicu",
    ],
};

pub const SOUTH_AFRICAN_NAMES: LocaleNames = LocaleNames {
    male_first: &[
        "Johan", "Robert", "Michael", "William", "Willem", "David", "Richard", "Thomas",
        "Charl", "Christopher", "Daniel", "Dante", "Paul", "Mark", "George", "Kenneth",
        "Steven", "Edward", "Ronald", "Anthony", "Albert", "Kevin", "Jaco", "Jacobus",
        "Mathuys", "Frankie", "Stephen", "Andre", "Raymond", "Joshua", "Dennis", "Pieter",
        "Henrie", "Rigard", "Riaan", "Joe", "Johannes", "Hannes", "Gerald", "Gerhard",
        "Willie", "Roy", "Adam", "Harry", "Wayne", "Billy", "Steve", "Louis",
        "Eugene", "Russell", "Bobbie", "Victor", "Martin", "Ernest", "Phillip", "Craig",
        "Alan", "Shawn", "Chris", "Earl", "Jimmy", "Brian", "Mike", "Leonard",
        "Dale", "Allen", "Vincent", "Francois", "Eddie", "Alexander", "Bernard", "Markus",
        "Micheal", "Theo", "Oscar", "Derek", "Wesley", "Derrick", "Herman", "Rick",
        "Ruben", "Cecil", "Roland", "Harvey", "Adriaan", "Karl", "Erik", "Neil",
        "Ian", "Iwan", "Julian", "Nick", "Shaun", "Cameron", "Wilbur", "Rudolph",
        "Rudy", "Bennie", "Lukas", "Simon", "Rufus", "Hugo", "Conrad", "Tommie",
        "Jan", "Jacques", "Morne", "Vernon", "Duanne", "Theunis", "Theuns", "Wessel",
        "Stephaans",
    ],
    female_first: &[
        "Susan", "Monica", "Linda", "Elsa", "Margaret", "Lisa", "Karen", "Helen",
        "Sandra", "Sara", "Kimberly", "Angelique", "Melissa", "Brenda", "Anna", "Annelie",
        "Katryn", "Amanda", "Stefanie", "Marie", "Janet", "Rosemarie", "Nicoleen", "Paula",
        "Robin", "Rita", "Edna", "Carmen", "Cindy", "Edith", "Ethel", "Ellen",
        "Elaine", "Charlotte", "Pauline", "Juanita", "Anita", "Rhonda", "Hazel", "Debbie",
        "Clara", "Lucille", "Eleanor", "Alicia", "Michele", "Geraldine", "Erika", "Bernice",
        "Audrey", "Yvonne", "Annette", "Renette", "Ida", "Melanie", "Jolanda", "Vanessa",
        "Alma", "Sue-Marie", "Carla", "Rosemary", "Wilma", "Kristin", "Natalie", "Charlene",
        "Melinda", "Maureen", "Tanya", "Marlene", "Heidi", "Lydia", "Vickie", "Nina",
        "Leona", "Jenny", "Sonia", "Kristina", "Katrina", "Belinda", "Natasha", "Cecile",
        "Angie", "Lynda", "Amelia", "Monique", "Kayla", "Yvette", "Olivia", "Antoinette",
        "Bridgette", "Karla", "Leticia", "Krista", "Robyn", "Rosalie", "Bernadette", "Krystal",
        "Nadine", "Estelle", "Lynette", "Eloise", "Jana", "Kerry", "Jenna", "Tasha",
        "Sonja", "Elisa", "Kristie",
    ],
    last: &[
        "Botha", "VanDerMerwe", "Nel", "VanWyk", "Smit", "Pretorius", "Venter", "Fourie",
        "DuPlessis", "Coetzee", "Steyn", "DuToit", "Kruger", "Meyer", "Viljoen", "Joubert",
        "Swanepoel", "VanZyl", "Erasmus", "Bezuidenhout", "LeRoux", "DeVilliers", "Marais", "Olivier",
        "Ferreira", "Strydom", "Potgieter", "Jacobs", "Naidoo", "Pillay", "Khumalo", "Dlamini",
        "Nkosi", "Mokoena", "Ndlovu", "Mahlangu",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_COUNTRIES: [Country; 6] = [
        Country::England,
        Country::France,
        Country::Germany,
        Country::Italy,
        Country::Romania,
        Country::SouthAfrica,
    ];

    #[test]
    fn test_every_locale_has_non_empty_tables() {
        for country in ALL_COUNTRIES {
            let tables = locale_names(country);
            assert!(!tables.male_first.is_empty(), "{country}: male first names");
            assert!(!tables.female_first.is_empty(), "{country}: female first names");
            assert!(!tables.last.is_empty(), "{country}: last names");
        }
    }

    #[test]
    fn test_tables_hold_clean_entries() {
        for country in ALL_COUNTRIES {
            let tables = locale_names(country);
            for name in tables
                .male_first
                .iter()
                .chain(tables.female_first)
                .chain(tables.last)
            {
                assert!(!name.is_empty());
                assert!(!name.contains(char::is_whitespace), "{name:?}");
            }
        }
    }
}
