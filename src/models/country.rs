macro_rules! define_countries {
    ($(($variant:ident, $display_name:literal)),* $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Country {
            $($variant,)*
        }

        impl Country {
            pub const COUNT: usize = count_items!($($variant)*);

            #[must_use]
            pub const fn display_name(&self) -> &'static str {
                match self {
                    $(Country::$variant => $display_name,)*
                }
            }

            #[must_use]
            pub const fn all() -> &'static [Self; Self::COUNT] {
                &[$(Country::$variant,)*]
            }
        }

        impl std::fmt::Display for Country {
            fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str(self.display_name())
            }
        }
    };
}

macro_rules! count_items {
    () => { 0 };
    ($head:tt $($tail:tt)*) => { 1 + count_items!($($tail)*) };
}

define_countries! {
    (Argentina, "Argentina"),
    (Australia, "Australia"),
    (Austria, "Austria"),
    (Belgium, "Belgium"),
    (Brazil, "Brazil"),
    (Canada, "Canada"),
    (Chile, "Chile"),
    (Colombia, "Colombia"),
    (Denmark, "Denmark"),
    (Egypt, "Egypt"),
    (Finland, "Finland"),
    (France, "France"),
    (Germany, "Germany"),
    (Ghana, "Ghana"),
    (Greece, "Greece"),
    (Iceland, "Iceland"),
    (India, "India"),
    (Indonesia, "Indonesia"),
    (Ireland, "Ireland"),
    (Italy, "Italy"),
    (Japan, "Japan"),
    (Kenya, "Kenya"),
    (Mexico, "Mexico"),
    (Morocco, "Morocco"),
    (Netherlands, "Netherlands"),
    (NewZealand, "New Zealand"),
    (Nigeria, "Nigeria"),
    (Norway, "Norway"),
    (Peru, "Peru"),
    (Philippines, "Philippines"),
    (Poland, "Poland"),
    (Portugal, "Portugal"),
    (SouthAfrica, "South Africa"),
    (SouthKorea, "South Korea"),
    (Spain, "Spain"),
    (Sweden, "Sweden"),
    (Switzerland, "Switzerland"),
    (Thailand, "Thailand"),
    (Turkey, "Turkey"),
    (UnitedKingdom, "United Kingdom"),
    (UnitedStates, "United States of America"),
    (Vietnam, "Vietnam"),
}

#[cfg(test)]
mod tests {
    use super::Country;

    #[test]
    fn every_variant_is_listed_once() {
        let all = Country::all();
        assert_eq!(all.len(), Country::COUNT);
        for (index, country) in all.iter().enumerate() {
            assert!(!all[index + 1..].contains(country), "{country} listed twice");
        }
    }

    #[test]
    fn display_uses_the_full_name() {
        assert_eq!(Country::NewZealand.to_string(), "New Zealand");
        assert_eq!(Country::UnitedStates.to_string(), "United States of America");
    }
}
