use crate::constants::{MAX_PRICE_CENTS, MIN_PRICE_CENTS};
use crate::models::{Country, Gender, OwnerContact, Price, VendorProfile};

use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "Amelia", "Arthur", "Beatrice", "Caleb", "Chloe", "Daniel", "Edith", "Felix",
    "Freya", "George", "Hannah", "Isaac", "Ivy", "Jasper", "Jade", "Leo",
    "Lucy", "Mabel", "Noah", "Olive", "Oscar", "Penelope", "Quentin", "Rosa",
    "Samuel", "Sienna", "Theo", "Violet", "William", "Zara",
];

const LAST_NAMES: &[&str] = &[
    "Abbott", "Barker", "Brennan", "Collins", "Dawson", "Ellis", "Fletcher", "Graham",
    "Hughes", "Jennings", "Kemp", "Lambert", "Marsh", "Nolan", "O'Connor", "Parker",
    "Quinn", "Reid", "Saunders", "Thornton", "Underwood", "Vaughan", "Walsh", "Young",
];

const BREEDS: &[&str] = &[
    "Affenpinscher", "Afghan Hound", "Airedale Terrier", "Akita", "Alaskan Malamute",
    "Basenji", "Basset Hound", "Beagle", "Bearded Collie", "Bernese Mountain Dog",
    "Bichon Frise", "Border Collie", "Border Terrier", "Boston Terrier", "Boxer",
    "Bulldog", "Cavalier King Charles Spaniel", "Chihuahua", "Chow Chow", "Cocker Spaniel",
    "Dachshund", "Dalmatian", "Doberman Pinscher", "English Setter", "French Bulldog",
    "German Shepherd", "Golden Retriever", "Great Dane", "Greyhound", "Irish Setter",
    "Jack Russell Terrier", "Labrador Retriever", "Maltese", "Newfoundland", "Pomeranian",
    "Poodle", "Pug", "Rottweiler", "Saint Bernard", "Samoyed", "Shiba Inu", "Siberian Husky",
    "Staffordshire Bull Terrier", "Vizsla", "Weimaraner", "Whippet", "Yorkshire Terrier",
];

const EMAIL_DOMAINS: &[&str] = &["gmail.com", "yahoo.com", "hotmail.com", "outlook.com"];

/// `#` is replaced by a random digit.
const PHONE_FORMATS: &[&str] = &[
    "###-###-####",
    "(###) ###-####",
    "1-###-###-####",
    "###.###.####",
    "###-###-#### x###",
    "(###) ###-#### x####",
];

/// A source of vendor metadata for catalog entries.
pub trait ProfileSource {
    fn next_profile(&mut self) -> VendorProfile;
}

/// Draws every field uniformly from fixed pools.
pub struct RandomProfiles<R> {
    rng: R,
}

impl RandomProfiles<ThreadRng> {
    pub fn from_thread_rng() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> RandomProfiles<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    fn pick(&mut self, pool: &[&'static str]) -> &'static str {
        pool.choose(&mut self.rng).copied().unwrap_or_default()
    }

    fn price(&mut self) -> Price {
        Price::from_cents(self.rng.gen_range(MIN_PRICE_CENTS..=MAX_PRICE_CENTS))
    }

    fn gender(&mut self) -> Gender {
        Gender::ALL.choose(&mut self.rng).copied().unwrap_or(Gender::Female)
    }

    fn country(&mut self) -> Country {
        Country::all().choose(&mut self.rng).copied().unwrap_or(Country::UnitedKingdom)
    }

    fn phone_number(&mut self) -> String {
        let format = self.pick(PHONE_FORMATS);
        format
            .chars()
            .map(|character| match character {
                '#' => char::from(b'0' + self.rng.gen_range(0..10_u8)),
                other => other,
            })
            .collect()
    }

    fn email(&mut self, first_name: &str, last_name: &str) -> String {
        let suffix = self.rng.gen_range(1..100_u32);
        let domain = self.pick(EMAIL_DOMAINS);
        format!(
            "{}.{}{suffix}@{domain}",
            email_local_part(first_name),
            email_local_part(last_name)
        )
    }
}

impl<R: Rng> ProfileSource for RandomProfiles<R> {
    fn next_profile(&mut self) -> VendorProfile {
        let first_name = self.pick(FIRST_NAMES);
        let last_name = self.pick(LAST_NAMES);
        let breed = self.pick(BREEDS);
        let price = self.price();
        let gender = self.gender();
        let location = self.country();
        let phone_number = self.phone_number();
        let email = self.email(first_name, last_name);

        VendorProfile {
            name: format!("{first_name} {last_name}"),
            breed: breed.to_string(),
            price,
            gender,
            location,
            owner: OwnerContact { phone_number, email },
        }
    }
}

fn email_local_part(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|character| character.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{ProfileSource, RandomProfiles, BREEDS};
    use crate::constants::{MAX_PRICE_CENTS, MIN_PRICE_CENTS};

    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded(seed: u64) -> RandomProfiles<StdRng> {
        RandomProfiles::new(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn prices_stay_within_range() {
        let mut profiles = seeded(1);
        for _ in 0..500 {
            let cents = profiles.next_profile().price.cents();
            assert!((MIN_PRICE_CENTS..=MAX_PRICE_CENTS).contains(&cents), "{cents} out of range");
        }
    }

    #[test]
    fn phone_numbers_have_every_placeholder_filled() {
        let mut profiles = seeded(2);
        for _ in 0..100 {
            let phone_number = profiles.next_profile().owner.phone_number;
            assert!(!phone_number.contains('#'), "{phone_number}");
            assert!(phone_number.chars().any(|character| character.is_ascii_digit()));
        }
    }

    #[test]
    fn emails_are_lowercase_and_derived_from_name() {
        let mut profiles = seeded(3);
        for _ in 0..100 {
            let profile = profiles.next_profile();
            let email = &profile.owner.email;
            let (local, domain) = email.split_once('@').expect("email has an @");
            let first_name = profile.name.split(' ').next().expect("name has a first part");

            assert!(local.starts_with(&first_name.to_ascii_lowercase()), "{email}");
            assert!(domain.contains('.'));
            assert_eq!(email.to_ascii_lowercase(), *email);
            assert!(!local.contains('\''));
        }
    }

    #[test]
    fn breeds_come_from_pool() {
        let mut profiles = seeded(4);
        for _ in 0..50 {
            let breed = profiles.next_profile().breed;
            assert!(BREEDS.contains(&breed.as_str()));
        }
    }

    #[test]
    fn same_seed_yields_same_profiles() {
        let first: Vec<_> = (0..10).map({
            let mut profiles = seeded(42);
            move |_| profiles.next_profile()
        }).collect();
        let second: Vec<_> = (0..10).map({
            let mut profiles = seeded(42);
            move |_| profiles.next_profile()
        }).collect();

        assert_eq!(first, second);
    }
}
