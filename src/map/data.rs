//! Static map data: the country table, adjacency, and opening influence.
//!
//! Index 0 and 1 are the superpower spaces. Every other entry is a country
//! that can hold influence.

use std::sync::OnceLock;

use smallvec::SmallVec;

use super::country::{CountryId, CountryInfo};
use super::region::Region;
use crate::core::Side;

pub const USSR: CountryId = CountryId(0);
pub const USA: CountryId = CountryId(1);
pub const CANADA: CountryId = CountryId(2);
pub const UK: CountryId = CountryId(3);
pub const NORWAY: CountryId = CountryId(4);
pub const SWEDEN: CountryId = CountryId(5);
pub const FINLAND: CountryId = CountryId(6);
pub const DENMARK: CountryId = CountryId(7);
pub const BENELUX: CountryId = CountryId(8);
pub const WEST_GERMANY: CountryId = CountryId(9);
pub const FRANCE: CountryId = CountryId(10);
pub const SPAIN_PORTUGAL: CountryId = CountryId(11);
pub const ITALY: CountryId = CountryId(12);
pub const GREECE: CountryId = CountryId(13);
pub const TURKEY: CountryId = CountryId(14);
pub const AUSTRIA: CountryId = CountryId(15);
pub const EAST_GERMANY: CountryId = CountryId(16);
pub const POLAND: CountryId = CountryId(17);
pub const CZECHOSLOVAKIA: CountryId = CountryId(18);
pub const HUNGARY: CountryId = CountryId(19);
pub const YUGOSLAVIA: CountryId = CountryId(20);
pub const ROMANIA: CountryId = CountryId(21);
pub const BULGARIA: CountryId = CountryId(22);
pub const LIBYA: CountryId = CountryId(23);
pub const EGYPT: CountryId = CountryId(24);
pub const ISRAEL: CountryId = CountryId(25);
pub const LEBANON: CountryId = CountryId(26);
pub const SYRIA: CountryId = CountryId(27);
pub const IRAQ: CountryId = CountryId(28);
pub const IRAN: CountryId = CountryId(29);
pub const JORDAN: CountryId = CountryId(30);
pub const GULF_STATES: CountryId = CountryId(31);
pub const SAUDI_ARABIA: CountryId = CountryId(32);
pub const AFGHANISTAN: CountryId = CountryId(33);
pub const PAKISTAN: CountryId = CountryId(34);
pub const INDIA: CountryId = CountryId(35);
pub const BURMA: CountryId = CountryId(36);
pub const LAOS_CAMBODIA: CountryId = CountryId(37);
pub const THAILAND: CountryId = CountryId(38);
pub const VIETNAM: CountryId = CountryId(39);
pub const MALAYSIA: CountryId = CountryId(40);
pub const INDONESIA: CountryId = CountryId(41);
pub const PHILIPPINES: CountryId = CountryId(42);
pub const AUSTRALIA: CountryId = CountryId(43);
pub const JAPAN: CountryId = CountryId(44);
pub const TAIWAN: CountryId = CountryId(45);
pub const SOUTH_KOREA: CountryId = CountryId(46);
pub const NORTH_KOREA: CountryId = CountryId(47);
pub const ALGERIA: CountryId = CountryId(48);
pub const MOROCCO: CountryId = CountryId(49);
pub const TUNISIA: CountryId = CountryId(50);
pub const WEST_AFRICAN_STATES: CountryId = CountryId(51);
pub const IVORY_COAST: CountryId = CountryId(52);
pub const SAHARAN_STATES: CountryId = CountryId(53);
pub const NIGERIA: CountryId = CountryId(54);
pub const CAMEROON: CountryId = CountryId(55);
pub const ZAIRE: CountryId = CountryId(56);
pub const ANGOLA: CountryId = CountryId(57);
pub const SOUTH_AFRICA: CountryId = CountryId(58);
pub const BOTSWANA: CountryId = CountryId(59);
pub const ZIMBABWE: CountryId = CountryId(60);
pub const SE_AFRICAN_STATES: CountryId = CountryId(61);
pub const KENYA: CountryId = CountryId(62);
pub const SOMALIA: CountryId = CountryId(63);
pub const ETHIOPIA: CountryId = CountryId(64);
pub const SUDAN: CountryId = CountryId(65);
pub const MEXICO: CountryId = CountryId(66);
pub const GUATEMALA: CountryId = CountryId(67);
pub const EL_SALVADOR: CountryId = CountryId(68);
pub const HONDURAS: CountryId = CountryId(69);
pub const COSTA_RICA: CountryId = CountryId(70);
pub const PANAMA: CountryId = CountryId(71);
pub const NICARAGUA: CountryId = CountryId(72);
pub const CUBA: CountryId = CountryId(73);
pub const HAITI: CountryId = CountryId(74);
pub const DOMINICAN_REPUBLIC: CountryId = CountryId(75);
pub const COLOMBIA: CountryId = CountryId(76);
pub const ECUADOR: CountryId = CountryId(77);
pub const PERU: CountryId = CountryId(78);
pub const CHILE: CountryId = CountryId(79);
pub const ARGENTINA: CountryId = CountryId(80);
pub const URUGUAY: CountryId = CountryId(81);
pub const PARAGUAY: CountryId = CountryId(82);
pub const BOLIVIA: CountryId = CountryId(83);
pub const BRAZIL: CountryId = CountryId(84);
pub const VENEZUELA: CountryId = CountryId(85);

/// Every country, indexed by `CountryId`.
pub static COUNTRIES: [CountryInfo; 86] = [
    CountryInfo { name: "USSR", stability: 0, battleground: false, superpower: Some(Side::Ussr), regions: &[] },
    CountryInfo { name: "USA", stability: 0, battleground: false, superpower: Some(Side::Us), regions: &[] },
    CountryInfo { name: "Canada", stability: 4, battleground: false, superpower: None, regions: &[Region::Europe, Region::WesternEurope] },
    CountryInfo { name: "UK", stability: 5, battleground: false, superpower: None, regions: &[Region::Europe, Region::WesternEurope] },
    CountryInfo { name: "Norway", stability: 4, battleground: false, superpower: None, regions: &[Region::Europe, Region::WesternEurope] },
    CountryInfo { name: "Sweden", stability: 4, battleground: false, superpower: None, regions: &[Region::Europe, Region::WesternEurope] },
    CountryInfo { name: "Finland", stability: 4, battleground: false, superpower: None, regions: &[Region::Europe, Region::WesternEurope, Region::EasternEurope] },
    CountryInfo { name: "Denmark", stability: 3, battleground: false, superpower: None, regions: &[Region::Europe, Region::WesternEurope] },
    CountryInfo { name: "Benelux", stability: 3, battleground: false, superpower: None, regions: &[Region::Europe, Region::WesternEurope] },
    CountryInfo { name: "West Germany", stability: 4, battleground: true, superpower: None, regions: &[Region::Europe, Region::WesternEurope] },
    CountryInfo { name: "France", stability: 3, battleground: true, superpower: None, regions: &[Region::Europe, Region::WesternEurope] },
    CountryInfo { name: "Spain/Portugal", stability: 2, battleground: false, superpower: None, regions: &[Region::Europe, Region::WesternEurope] },
    CountryInfo { name: "Italy", stability: 2, battleground: true, superpower: None, regions: &[Region::Europe, Region::WesternEurope] },
    CountryInfo { name: "Greece", stability: 2, battleground: false, superpower: None, regions: &[Region::Europe, Region::WesternEurope] },
    CountryInfo { name: "Turkey", stability: 2, battleground: false, superpower: None, regions: &[Region::Europe, Region::WesternEurope] },
    CountryInfo { name: "Austria", stability: 4, battleground: false, superpower: None, regions: &[Region::Europe, Region::WesternEurope, Region::EasternEurope] },
    CountryInfo { name: "East Germany", stability: 3, battleground: true, superpower: None, regions: &[Region::Europe, Region::EasternEurope] },
    CountryInfo { name: "Poland", stability: 3, battleground: true, superpower: None, regions: &[Region::Europe, Region::EasternEurope] },
    CountryInfo { name: "Czechoslovakia", stability: 3, battleground: false, superpower: None, regions: &[Region::Europe, Region::EasternEurope] },
    CountryInfo { name: "Hungary", stability: 3, battleground: false, superpower: None, regions: &[Region::Europe, Region::EasternEurope] },
    CountryInfo { name: "Yugoslavia", stability: 3, battleground: false, superpower: None, regions: &[Region::Europe, Region::EasternEurope] },
    CountryInfo { name: "Romania", stability: 3, battleground: false, superpower: None, regions: &[Region::Europe, Region::EasternEurope] },
    CountryInfo { name: "Bulgaria", stability: 3, battleground: false, superpower: None, regions: &[Region::Europe, Region::EasternEurope] },
    CountryInfo { name: "Libya", stability: 2, battleground: true, superpower: None, regions: &[Region::MiddleEast] },
    CountryInfo { name: "Egypt", stability: 2, battleground: true, superpower: None, regions: &[Region::MiddleEast] },
    CountryInfo { name: "Israel", stability: 4, battleground: true, superpower: None, regions: &[Region::MiddleEast] },
    CountryInfo { name: "Lebanon", stability: 1, battleground: false, superpower: None, regions: &[Region::MiddleEast] },
    CountryInfo { name: "Syria", stability: 2, battleground: false, superpower: None, regions: &[Region::MiddleEast] },
    CountryInfo { name: "Iraq", stability: 3, battleground: true, superpower: None, regions: &[Region::MiddleEast] },
    CountryInfo { name: "Iran", stability: 2, battleground: true, superpower: None, regions: &[Region::MiddleEast] },
    CountryInfo { name: "Jordan", stability: 2, battleground: false, superpower: None, regions: &[Region::MiddleEast] },
    CountryInfo { name: "Gulf States", stability: 3, battleground: false, superpower: None, regions: &[Region::MiddleEast] },
    CountryInfo { name: "Saudi Arabia", stability: 3, battleground: true, superpower: None, regions: &[Region::MiddleEast] },
    CountryInfo { name: "Afghanistan", stability: 2, battleground: false, superpower: None, regions: &[Region::Asia] },
    CountryInfo { name: "Pakistan", stability: 2, battleground: true, superpower: None, regions: &[Region::Asia] },
    CountryInfo { name: "India", stability: 3, battleground: true, superpower: None, regions: &[Region::Asia] },
    CountryInfo { name: "Burma", stability: 2, battleground: false, superpower: None, regions: &[Region::Asia, Region::SoutheastAsia] },
    CountryInfo { name: "Laos/Cambodia", stability: 1, battleground: false, superpower: None, regions: &[Region::Asia, Region::SoutheastAsia] },
    CountryInfo { name: "Thailand", stability: 2, battleground: true, superpower: None, regions: &[Region::Asia, Region::SoutheastAsia] },
    CountryInfo { name: "Vietnam", stability: 1, battleground: false, superpower: None, regions: &[Region::Asia, Region::SoutheastAsia] },
    CountryInfo { name: "Malaysia", stability: 2, battleground: false, superpower: None, regions: &[Region::Asia, Region::SoutheastAsia] },
    CountryInfo { name: "Indonesia", stability: 1, battleground: false, superpower: None, regions: &[Region::Asia, Region::SoutheastAsia] },
    CountryInfo { name: "Philippines", stability: 2, battleground: false, superpower: None, regions: &[Region::Asia, Region::SoutheastAsia] },
    CountryInfo { name: "Australia", stability: 4, battleground: false, superpower: None, regions: &[Region::Asia] },
    CountryInfo { name: "Japan", stability: 4, battleground: true, superpower: None, regions: &[Region::Asia] },
    CountryInfo { name: "Taiwan", stability: 3, battleground: false, superpower: None, regions: &[Region::Asia] },
    CountryInfo { name: "South Korea", stability: 3, battleground: true, superpower: None, regions: &[Region::Asia] },
    CountryInfo { name: "North Korea", stability: 3, battleground: true, superpower: None, regions: &[Region::Asia] },
    CountryInfo { name: "Algeria", stability: 2, battleground: true, superpower: None, regions: &[Region::Africa] },
    CountryInfo { name: "Morocco", stability: 3, battleground: false, superpower: None, regions: &[Region::Africa] },
    CountryInfo { name: "Tunisia", stability: 2, battleground: false, superpower: None, regions: &[Region::Africa] },
    CountryInfo { name: "West African States", stability: 2, battleground: false, superpower: None, regions: &[Region::Africa] },
    CountryInfo { name: "Ivory Coast", stability: 2, battleground: false, superpower: None, regions: &[Region::Africa] },
    CountryInfo { name: "Saharan States", stability: 1, battleground: false, superpower: None, regions: &[Region::Africa] },
    CountryInfo { name: "Nigeria", stability: 1, battleground: true, superpower: None, regions: &[Region::Africa] },
    CountryInfo { name: "Cameroon", stability: 1, battleground: false, superpower: None, regions: &[Region::Africa] },
    CountryInfo { name: "Zaire", stability: 1, battleground: true, superpower: None, regions: &[Region::Africa] },
    CountryInfo { name: "Angola", stability: 1, battleground: true, superpower: None, regions: &[Region::Africa] },
    CountryInfo { name: "South Africa", stability: 3, battleground: true, superpower: None, regions: &[Region::Africa] },
    CountryInfo { name: "Botswana", stability: 2, battleground: false, superpower: None, regions: &[Region::Africa] },
    CountryInfo { name: "Zimbabwe", stability: 1, battleground: false, superpower: None, regions: &[Region::Africa] },
    CountryInfo { name: "SE African States", stability: 1, battleground: false, superpower: None, regions: &[Region::Africa] },
    CountryInfo { name: "Kenya", stability: 2, battleground: false, superpower: None, regions: &[Region::Africa] },
    CountryInfo { name: "Somalia", stability: 2, battleground: false, superpower: None, regions: &[Region::Africa] },
    CountryInfo { name: "Ethiopia", stability: 1, battleground: false, superpower: None, regions: &[Region::Africa] },
    CountryInfo { name: "Sudan", stability: 1, battleground: false, superpower: None, regions: &[Region::Africa] },
    CountryInfo { name: "Mexico", stability: 2, battleground: true, superpower: None, regions: &[Region::CentralAmerica] },
    CountryInfo { name: "Guatemala", stability: 1, battleground: false, superpower: None, regions: &[Region::CentralAmerica] },
    CountryInfo { name: "El Salvador", stability: 1, battleground: false, superpower: None, regions: &[Region::CentralAmerica] },
    CountryInfo { name: "Honduras", stability: 2, battleground: false, superpower: None, regions: &[Region::CentralAmerica] },
    CountryInfo { name: "Costa Rica", stability: 3, battleground: false, superpower: None, regions: &[Region::CentralAmerica] },
    CountryInfo { name: "Panama", stability: 2, battleground: true, superpower: None, regions: &[Region::CentralAmerica] },
    CountryInfo { name: "Nicaragua", stability: 1, battleground: false, superpower: None, regions: &[Region::CentralAmerica] },
    CountryInfo { name: "Cuba", stability: 3, battleground: true, superpower: None, regions: &[Region::CentralAmerica] },
    CountryInfo { name: "Haiti", stability: 1, battleground: false, superpower: None, regions: &[Region::CentralAmerica] },
    CountryInfo { name: "Dominican Republic", stability: 1, battleground: false, superpower: None, regions: &[Region::CentralAmerica] },
    CountryInfo { name: "Colombia", stability: 1, battleground: false, superpower: None, regions: &[Region::SouthAmerica] },
    CountryInfo { name: "Ecuador", stability: 2, battleground: false, superpower: None, regions: &[Region::SouthAmerica] },
    CountryInfo { name: "Peru", stability: 2, battleground: false, superpower: None, regions: &[Region::SouthAmerica] },
    CountryInfo { name: "Chile", stability: 3, battleground: true, superpower: None, regions: &[Region::SouthAmerica] },
    CountryInfo { name: "Argentina", stability: 2, battleground: true, superpower: None, regions: &[Region::SouthAmerica] },
    CountryInfo { name: "Uruguay", stability: 2, battleground: false, superpower: None, regions: &[Region::SouthAmerica] },
    CountryInfo { name: "Paraguay", stability: 2, battleground: false, superpower: None, regions: &[Region::SouthAmerica] },
    CountryInfo { name: "Bolivia", stability: 2, battleground: false, superpower: None, regions: &[Region::SouthAmerica] },
    CountryInfo { name: "Brazil", stability: 2, battleground: true, superpower: None, regions: &[Region::SouthAmerica] },
    CountryInfo { name: "Venezuela", stability: 2, battleground: true, superpower: None, regions: &[Region::SouthAmerica] },
];

/// Borders, each listed once.
const BORDERS: &[(CountryId, CountryId)] = &[
    (USA, CANADA),
    (USA, CUBA),
    (USA, MEXICO),
    (USA, JAPAN),
    (USSR, FINLAND),
    (USSR, POLAND),
    (USSR, ROMANIA),
    (USSR, AFGHANISTAN),
    (USSR, NORTH_KOREA),
    (CANADA, UK),
    (UK, NORWAY),
    (UK, BENELUX),
    (UK, FRANCE),
    (NORWAY, SWEDEN),
    (SWEDEN, FINLAND),
    (SWEDEN, DENMARK),
    (DENMARK, WEST_GERMANY),
    (BENELUX, WEST_GERMANY),
    (FRANCE, WEST_GERMANY),
    (FRANCE, SPAIN_PORTUGAL),
    (FRANCE, ITALY),
    (FRANCE, ALGERIA),
    (SPAIN_PORTUGAL, ITALY),
    (SPAIN_PORTUGAL, MOROCCO),
    (ITALY, AUSTRIA),
    (ITALY, YUGOSLAVIA),
    (ITALY, GREECE),
    (GREECE, YUGOSLAVIA),
    (GREECE, BULGARIA),
    (GREECE, TURKEY),
    (TURKEY, BULGARIA),
    (TURKEY, ROMANIA),
    (TURKEY, SYRIA),
    (AUSTRIA, WEST_GERMANY),
    (AUSTRIA, EAST_GERMANY),
    (AUSTRIA, HUNGARY),
    (EAST_GERMANY, WEST_GERMANY),
    (EAST_GERMANY, POLAND),
    (EAST_GERMANY, CZECHOSLOVAKIA),
    (POLAND, CZECHOSLOVAKIA),
    (CZECHOSLOVAKIA, HUNGARY),
    (HUNGARY, ROMANIA),
    (HUNGARY, YUGOSLAVIA),
    (YUGOSLAVIA, ROMANIA),
    (LEBANON, SYRIA),
    (LEBANON, ISRAEL),
    (LEBANON, JORDAN),
    (ISRAEL, SYRIA),
    (ISRAEL, JORDAN),
    (ISRAEL, EGYPT),
    (JORDAN, IRAQ),
    (JORDAN, SAUDI_ARABIA),
    (IRAQ, IRAN),
    (IRAQ, GULF_STATES),
    (IRAQ, SAUDI_ARABIA),
    (GULF_STATES, SAUDI_ARABIA),
    (IRAN, AFGHANISTAN),
    (IRAN, PAKISTAN),
    (EGYPT, LIBYA),
    (EGYPT, SUDAN),
    (LIBYA, TUNISIA),
    (AFGHANISTAN, PAKISTAN),
    (PAKISTAN, INDIA),
    (INDIA, BURMA),
    (BURMA, LAOS_CAMBODIA),
    (LAOS_CAMBODIA, THAILAND),
    (LAOS_CAMBODIA, VIETNAM),
    (THAILAND, VIETNAM),
    (THAILAND, MALAYSIA),
    (MALAYSIA, AUSTRALIA),
    (MALAYSIA, INDONESIA),
    (INDONESIA, PHILIPPINES),
    (PHILIPPINES, JAPAN),
    (JAPAN, TAIWAN),
    (JAPAN, SOUTH_KOREA),
    (TAIWAN, SOUTH_KOREA),
    (SOUTH_KOREA, NORTH_KOREA),
    (ALGERIA, TUNISIA),
    (ALGERIA, MOROCCO),
    (ALGERIA, SAHARAN_STATES),
    (MOROCCO, WEST_AFRICAN_STATES),
    (WEST_AFRICAN_STATES, IVORY_COAST),
    (IVORY_COAST, NIGERIA),
    (SAHARAN_STATES, NIGERIA),
    (NIGERIA, CAMEROON),
    (CAMEROON, ZAIRE),
    (ZAIRE, ANGOLA),
    (ZAIRE, ZIMBABWE),
    (ANGOLA, BOTSWANA),
    (ANGOLA, SOUTH_AFRICA),
    (BOTSWANA, SOUTH_AFRICA),
    (BOTSWANA, ZIMBABWE),
    (ZIMBABWE, SE_AFRICAN_STATES),
    (SE_AFRICAN_STATES, KENYA),
    (KENYA, SOMALIA),
    (SOMALIA, ETHIOPIA),
    (ETHIOPIA, SUDAN),
    (MEXICO, GUATEMALA),
    (GUATEMALA, EL_SALVADOR),
    (GUATEMALA, HONDURAS),
    (EL_SALVADOR, HONDURAS),
    (HONDURAS, COSTA_RICA),
    (HONDURAS, NICARAGUA),
    (COSTA_RICA, NICARAGUA),
    (COSTA_RICA, PANAMA),
    (NICARAGUA, CUBA),
    (CUBA, HAITI),
    (HAITI, DOMINICAN_REPUBLIC),
    (PANAMA, COLOMBIA),
    (COLOMBIA, ECUADOR),
    (COLOMBIA, VENEZUELA),
    (ECUADOR, PERU),
    (PERU, BOLIVIA),
    (PERU, CHILE),
    (CHILE, ARGENTINA),
    (ARGENTINA, URUGUAY),
    (ARGENTINA, PARAGUAY),
    (URUGUAY, PARAGUAY),
    (URUGUAY, BRAZIL),
    (PARAGUAY, BOLIVIA),
    (BRAZIL, VENEZUELA),
];

/// Adjacency lists built from `BORDERS` on first use.
pub(crate) fn adjacency() -> &'static [SmallVec<[CountryId; 6]>] {
    static ADJACENCY: OnceLock<Vec<SmallVec<[CountryId; 6]>>> = OnceLock::new();
    ADJACENCY.get_or_init(|| {
        let mut lists = vec![SmallVec::new(); COUNTRIES.len()];
        for &(a, b) in BORDERS {
            lists[a.index()].push(b);
            lists[b.index()].push(a);
        }
        lists
    })
}

/// Influence printed on the map at the start of the game.
pub const OPENING_INFLUENCE: &[(CountryId, Side, u32)] = &[
    (SYRIA, Side::Ussr, 1),
    (IRAQ, Side::Ussr, 1),
    (NORTH_KOREA, Side::Ussr, 3),
    (EAST_GERMANY, Side::Ussr, 3),
    (FINLAND, Side::Ussr, 1),
    (CANADA, Side::Us, 2),
    (IRAN, Side::Us, 1),
    (ISRAEL, Side::Us, 1),
    (JAPAN, Side::Us, 1),
    (AUSTRALIA, Side::Us, 4),
    (PHILIPPINES, Side::Us, 1),
    (SOUTH_KOREA, Side::Us, 1),
    (PANAMA, Side::Us, 1),
    (SOUTH_AFRICA, Side::Us, 1),
    (UK, Side::Us, 5),
];
