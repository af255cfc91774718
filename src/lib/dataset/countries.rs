pub fn iso_code_for(country: &str) -> Option<&'static str> {
    COUNTRY_ISO_CODES
        .iter()
        .find(|&x| x.country_name == country)
        .map(|country_code_data| country_code_data.country_code_3)
}

pub struct CountryIsoData {
    pub country_name: &'static str,
    pub country_code_3: &'static str,
}

/*
 * Every country that has won a final, keyed by the name used in the dataset
 * after normalization. Codes are ISO 3166-1 alpha-3. England has no code of
 * its own and is drawn as GBR.
 */

pub const COUNTRY_ISO_CODES: [CountryIsoData; 8] = [
    CountryIsoData {
        country_name: "Uruguay",
        country_code_3: "URY",
    },
    CountryIsoData {
        country_name: "Italy",
        country_code_3: "ITA",
    },
    CountryIsoData {
        country_name: "Brazil",
        country_code_3: "BRA",
    },
    CountryIsoData {
        country_name: "Germany",
        country_code_3: "DEU",
    },
    CountryIsoData {
        country_name: "England",
        country_code_3: "GBR",
    },
    CountryIsoData {
        country_name: "Argentina",
        country_code_3: "ARG",
    },
    CountryIsoData {
        country_name: "France",
        country_code_3: "FRA",
    },
    CountryIsoData {
        country_name: "Spain",
        country_code_3: "ESP",
    },
];
