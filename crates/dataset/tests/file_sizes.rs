//! Integration test: legal GRD sizes derived from the grid definitions.

use imdgrid_dataset::{DataType, MAX_YEAR, MIN_YEAR, YearLength};

#[test]
fn legal_sizes_match_published_constants() {
    let cases: &[(DataType, YearLength, u64)] = &[
        (DataType::Rain, YearLength::Common, 25_425_901),
        (DataType::Rain, YearLength::Leap, 25_495_561),
        (DataType::MinTemp, YearLength::Common, 1_403_061),
        (DataType::MinTemp, YearLength::Leap, 1_406_905),
        (DataType::MaxTemp, YearLength::Common, 1_403_061),
        (DataType::MaxTemp, YearLength::Leap, 1_406_905),
    ];
    for &(t, len, expected) in cases {
        assert_eq!(
            t.spec().file_size(len),
            expected,
            "file size for {t} with {} days",
            len.days()
        );
    }
}

#[test]
fn temperature_datasets_share_a_grid() {
    let min = DataType::MinTemp.spec();
    let max = DataType::MaxTemp.spec();
    assert_eq!(min.lats(), max.lats());
    assert_eq!(min.lons(), max.lons());
    assert_eq!(min.units(), max.units());
    assert_ne!(min.var_name(), max.var_name());
}

#[test]
fn every_year_in_range_has_one_expected_length() {
    for year in MIN_YEAR..=MAX_YEAR {
        let len = YearLength::expected_for(year);
        assert_eq!(len == YearLength::Leap, year % 4 == 0, "year {year}");
    }
}
