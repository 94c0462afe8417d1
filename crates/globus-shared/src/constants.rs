/// Application name
pub const APP_NAME: &str = "Globus";

/// Base endpoint of the REST Countries API
pub const API_BASE_URL: &str = "https://restcountries.com/v3.1/all";

/// Fields requested from the API, in query-string order
pub const API_FIELDS: [&str; 4] = ["name", "capital", "population", "flags"];

/// Full default endpoint including the `fields` filter
pub const DEFAULT_API_URL: &str =
    "https://restcountries.com/v3.1/all?fields=name,capital,population,flags";

/// Key under which the favorites list is persisted
pub const FAVORITES_KEY: &str = "favoriteCountries_v1";
