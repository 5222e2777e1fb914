//! Static country table: source-locale name, English map name, continent
//!
//! Spellings follow the names the trip editor writes into records. The
//! English column matches the country identifiers used by the world-map
//! overlay dataset.

use super::Continent;

/// (Spanish name, English name, continent)
pub(super) const COUNTRY_TABLE: &[(&str, &str, Continent)] = &[
    // Europe
    ("España", "Spain", Continent::Europe),
    ("Portugal", "Portugal", Continent::Europe),
    ("Francia", "France", Continent::Europe),
    ("Italia", "Italy", Continent::Europe),
    ("Alemania", "Germany", Continent::Europe),
    ("Reino Unido", "United Kingdom", Continent::Europe),
    ("Irlanda", "Ireland", Continent::Europe),
    ("Países Bajos", "Netherlands", Continent::Europe),
    ("Bélgica", "Belgium", Continent::Europe),
    ("Luxemburgo", "Luxembourg", Continent::Europe),
    ("Suiza", "Switzerland", Continent::Europe),
    ("Austria", "Austria", Continent::Europe),
    ("República Checa", "Czech Republic", Continent::Europe),
    ("Eslovaquia", "Slovakia", Continent::Europe),
    ("Polonia", "Poland", Continent::Europe),
    ("Hungría", "Hungary", Continent::Europe),
    ("Eslovenia", "Slovenia", Continent::Europe),
    ("Croacia", "Croatia", Continent::Europe),
    ("Bosnia y Herzegovina", "Bosnia and Herzegovina", Continent::Europe),
    ("Serbia", "Serbia", Continent::Europe),
    ("Montenegro", "Montenegro", Continent::Europe),
    ("Albania", "Albania", Continent::Europe),
    ("Macedonia del Norte", "North Macedonia", Continent::Europe),
    ("Grecia", "Greece", Continent::Europe),
    ("Bulgaria", "Bulgaria", Continent::Europe),
    ("Rumanía", "Romania", Continent::Europe),
    ("Moldavia", "Moldova", Continent::Europe),
    ("Ucrania", "Ukraine", Continent::Europe),
    ("Bielorrusia", "Belarus", Continent::Europe),
    ("Lituania", "Lithuania", Continent::Europe),
    ("Letonia", "Latvia", Continent::Europe),
    ("Estonia", "Estonia", Continent::Europe),
    ("Finlandia", "Finland", Continent::Europe),
    ("Suecia", "Sweden", Continent::Europe),
    ("Noruega", "Norway", Continent::Europe),
    ("Dinamarca", "Denmark", Continent::Europe),
    ("Islandia", "Iceland", Continent::Europe),
    ("Rusia", "Russia", Continent::Europe),
    ("Malta", "Malta", Continent::Europe),
    ("Chipre", "Cyprus", Continent::Europe),
    ("Andorra", "Andorra", Continent::Europe),
    ("Mónaco", "Monaco", Continent::Europe),
    ("San Marino", "San Marino", Continent::Europe),
    ("Liechtenstein", "Liechtenstein", Continent::Europe),
    ("Ciudad del Vaticano", "Vatican City", Continent::Europe),
    // North America
    ("Estados Unidos", "United States of America", Continent::NorthAmerica),
    ("Canadá", "Canada", Continent::NorthAmerica),
    ("México", "Mexico", Continent::NorthAmerica),
    ("Guatemala", "Guatemala", Continent::NorthAmerica),
    ("Belice", "Belize", Continent::NorthAmerica),
    ("Honduras", "Honduras", Continent::NorthAmerica),
    ("El Salvador", "El Salvador", Continent::NorthAmerica),
    ("Nicaragua", "Nicaragua", Continent::NorthAmerica),
    ("Costa Rica", "Costa Rica", Continent::NorthAmerica),
    ("Panamá", "Panama", Continent::NorthAmerica),
    ("Cuba", "Cuba", Continent::NorthAmerica),
    ("Jamaica", "Jamaica", Continent::NorthAmerica),
    ("Haití", "Haiti", Continent::NorthAmerica),
    ("República Dominicana", "Dominican Republic", Continent::NorthAmerica),
    ("Bahamas", "Bahamas", Continent::NorthAmerica),
    ("Puerto Rico", "Puerto Rico", Continent::NorthAmerica),
    ("Trinidad y Tobago", "Trinidad and Tobago", Continent::NorthAmerica),
    // South America
    ("Colombia", "Colombia", Continent::SouthAmerica),
    ("Venezuela", "Venezuela", Continent::SouthAmerica),
    ("Ecuador", "Ecuador", Continent::SouthAmerica),
    ("Perú", "Peru", Continent::SouthAmerica),
    ("Bolivia", "Bolivia", Continent::SouthAmerica),
    ("Chile", "Chile", Continent::SouthAmerica),
    ("Argentina", "Argentina", Continent::SouthAmerica),
    ("Uruguay", "Uruguay", Continent::SouthAmerica),
    ("Paraguay", "Paraguay", Continent::SouthAmerica),
    ("Brasil", "Brazil", Continent::SouthAmerica),
    ("Guyana", "Guyana", Continent::SouthAmerica),
    ("Surinam", "Suriname", Continent::SouthAmerica),
    // Asia
    ("Turquía", "Turkey", Continent::Asia),
    ("Georgia", "Georgia", Continent::Asia),
    ("Armenia", "Armenia", Continent::Asia),
    ("Azerbaiyán", "Azerbaijan", Continent::Asia),
    ("Israel", "Israel", Continent::Asia),
    ("Palestina", "Palestine", Continent::Asia),
    ("Jordania", "Jordan", Continent::Asia),
    ("Líbano", "Lebanon", Continent::Asia),
    ("Siria", "Syria", Continent::Asia),
    ("Irak", "Iraq", Continent::Asia),
    ("Irán", "Iran", Continent::Asia),
    ("Arabia Saudita", "Saudi Arabia", Continent::Asia),
    ("Emiratos Árabes Unidos", "United Arab Emirates", Continent::Asia),
    ("Catar", "Qatar", Continent::Asia),
    ("Kuwait", "Kuwait", Continent::Asia),
    ("Baréin", "Bahrain", Continent::Asia),
    ("Omán", "Oman", Continent::Asia),
    ("Yemen", "Yemen", Continent::Asia),
    ("Afganistán", "Afghanistan", Continent::Asia),
    ("Pakistán", "Pakistan", Continent::Asia),
    ("India", "India", Continent::Asia),
    ("Nepal", "Nepal", Continent::Asia),
    ("Bután", "Bhutan", Continent::Asia),
    ("Bangladés", "Bangladesh", Continent::Asia),
    ("Sri Lanka", "Sri Lanka", Continent::Asia),
    ("Maldivas", "Maldives", Continent::Asia),
    ("China", "China", Continent::Asia),
    ("Mongolia", "Mongolia", Continent::Asia),
    ("Japón", "Japan", Continent::Asia),
    ("Corea del Sur", "South Korea", Continent::Asia),
    ("Corea del Norte", "North Korea", Continent::Asia),
    ("Taiwán", "Taiwan", Continent::Asia),
    ("Vietnam", "Vietnam", Continent::Asia),
    ("Laos", "Laos", Continent::Asia),
    ("Camboya", "Cambodia", Continent::Asia),
    ("Tailandia", "Thailand", Continent::Asia),
    ("Birmania", "Myanmar", Continent::Asia),
    ("Malasia", "Malaysia", Continent::Asia),
    ("Singapur", "Singapore", Continent::Asia),
    ("Indonesia", "Indonesia", Continent::Asia),
    ("Filipinas", "Philippines", Continent::Asia),
    ("Brunéi", "Brunei", Continent::Asia),
    ("Kazajistán", "Kazakhstan", Continent::Asia),
    ("Uzbekistán", "Uzbekistan", Continent::Asia),
    ("Turkmenistán", "Turkmenistan", Continent::Asia),
    ("Kirguistán", "Kyrgyzstan", Continent::Asia),
    ("Tayikistán", "Tajikistan", Continent::Asia),
    // Africa
    ("Marruecos", "Morocco", Continent::Africa),
    ("Argelia", "Algeria", Continent::Africa),
    ("Túnez", "Tunisia", Continent::Africa),
    ("Libia", "Libya", Continent::Africa),
    ("Egipto", "Egypt", Continent::Africa),
    ("Sudán", "Sudan", Continent::Africa),
    ("Etiopía", "Ethiopia", Continent::Africa),
    ("Kenia", "Kenya", Continent::Africa),
    ("Tanzania", "Tanzania", Continent::Africa),
    ("Uganda", "Uganda", Continent::Africa),
    ("Ruanda", "Rwanda", Continent::Africa),
    ("Senegal", "Senegal", Continent::Africa),
    ("Gambia", "Gambia", Continent::Africa),
    ("Ghana", "Ghana", Continent::Africa),
    ("Costa de Marfil", "Ivory Coast", Continent::Africa),
    ("Nigeria", "Nigeria", Continent::Africa),
    ("Camerún", "Cameroon", Continent::Africa),
    ("Sudáfrica", "South Africa", Continent::Africa),
    ("Namibia", "Namibia", Continent::Africa),
    ("Botsuana", "Botswana", Continent::Africa),
    ("Zimbabue", "Zimbabwe", Continent::Africa),
    ("Zambia", "Zambia", Continent::Africa),
    ("Mozambique", "Mozambique", Continent::Africa),
    ("Madagascar", "Madagascar", Continent::Africa),
    ("Mauricio", "Mauritius", Continent::Africa),
    ("Seychelles", "Seychelles", Continent::Africa),
    ("Cabo Verde", "Cape Verde", Continent::Africa),
    ("Mali", "Mali", Continent::Africa),
    ("Níger", "Niger", Continent::Africa),
    ("Chad", "Chad", Continent::Africa),
    ("Angola", "Angola", Continent::Africa),
    (
        "República Democrática del Congo",
        "Democratic Republic of the Congo",
        Continent::Africa,
    ),
    // Oceania
    ("Australia", "Australia", Continent::Oceania),
    ("Nueva Zelanda", "New Zealand", Continent::Oceania),
    ("Fiyi", "Fiji", Continent::Oceania),
    ("Papúa Nueva Guinea", "Papua New Guinea", Continent::Oceania),
    ("Samoa", "Samoa", Continent::Oceania),
    ("Tonga", "Tonga", Continent::Oceania),
    ("Vanuatu", "Vanuatu", Continent::Oceania),
    // Antarctica
    ("Antártida", "Antarctica", Continent::Antarctica),
];
