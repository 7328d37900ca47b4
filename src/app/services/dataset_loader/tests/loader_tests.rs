//! Loader tests against CSV fixtures on disk

use crate::Error;
use crate::app::models::City;
use crate::app::services::dataset_loader::DatasetLoader;
use crate::config::Config;
use std::fs;
use tempfile::TempDir;

const CHICAGO_STYLE_HEADER: &str =
    ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year";

const WASHINGTON_STYLE_HEADER: &str =
    ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type";

fn write_fixture(dir: &TempDir, filename: &str, contents: &str) {
    fs::write(dir.path().join(filename), contents).unwrap();
}

fn loader_for(dir: &TempDir) -> DatasetLoader {
    DatasetLoader::new(Config::new(dir.path()))
}

#[test]
fn test_load_chicago_style_export() {
    let dir = TempDir::new().unwrap();
    write_fixture(
        &dir,
        "chicago.csv",
        &format!(
            "{}\n\
             0,2017-01-02 08:15:00,2017-01-02 08:20:00,300,Clark St,State St,Subscriber,Male,1985.0\n\
             1,2017-02-15 09:05:00,2017-02-15 09:25:00,1200,State St,Clark St,Customer,Female,1992.0\n",
            CHICAGO_STYLE_HEADER
        ),
    );

    let result = loader_for(&dir).load(City::Chicago).unwrap();
    assert_eq!(result.stats.rows_read, 2);
    assert_eq!(result.stats.records_loaded, 2);
    assert_eq!(result.stats.rows_skipped, 0);

    let records = result.dataset.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].start_station, "Clark St");
    assert_eq!(records[0].month(), 1);
    assert_eq!(records[0].day_of_week(), "Monday");
    assert_eq!(records[0].gender.as_deref(), Some("Male"));
    assert_eq!(records[0].birth_year, Some(1985));
    assert_eq!(records[1].duration_secs, 1200.0);
}

#[test]
fn test_load_washington_style_export_without_demographics() {
    let dir = TempDir::new().unwrap();
    write_fixture(
        &dir,
        "washington.csv",
        &format!(
            "{}\n\
             0,2017-03-01 17:45:00,2017-03-01 18:00:00,900.5,K St,M St,Registered\n",
            WASHINGTON_STYLE_HEADER
        ),
    );

    let result = loader_for(&dir).load(City::Washington).unwrap();
    let records = result.dataset.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].gender, None);
    assert_eq!(records[0].birth_year, None);
    assert_eq!(records[0].user_type.as_deref(), Some("Registered"));
    assert_eq!(records[0].duration_secs, 900.5);
}

#[test]
fn test_missing_file_is_a_data_source_error() {
    let dir = TempDir::new().unwrap();
    let err = loader_for(&dir).load(City::NewYorkCity).unwrap_err();
    assert!(matches!(err, Error::DataSource { .. }));
}

#[test]
fn test_malformed_rows_are_skipped_and_counted() {
    let dir = TempDir::new().unwrap();
    write_fixture(
        &dir,
        "chicago.csv",
        &format!(
            "{}\n\
             0,2017-01-02 08:15:00,,300,Clark St,State St,Subscriber,Male,1985.0\n\
             1,not-a-timestamp,,300,Clark St,State St,Subscriber,Male,1985.0\n\
             2,2017-01-03 10:00:00,,oops,Clark St,State St,Subscriber,Male,1985.0\n\
             3,2017-01-04 11:00:00,,420,Clark St,State St,Customer,,\n",
            CHICAGO_STYLE_HEADER
        ),
    );

    let result = loader_for(&dir).load(City::Chicago).unwrap();
    assert_eq!(result.stats.rows_read, 4);
    assert_eq!(result.stats.records_loaded, 2);
    assert_eq!(result.stats.rows_skipped, 2);
    assert_eq!(result.stats.errors.len(), 2);
    assert!(result.stats.errors[0].starts_with("row 3:"));

    // Empty demographics degrade to None without losing the row
    let last = &result.dataset.records()[1];
    assert_eq!(last.gender, None);
    assert_eq!(last.birth_year, None);
}

#[test]
fn test_missing_required_column_fails_the_load() {
    let dir = TempDir::new().unwrap();
    write_fixture(
        &dir,
        "chicago.csv",
        ",End Time,Trip Duration,Start Station,End Station\n0,,300,A,B\n",
    );

    let err = loader_for(&dir).load(City::Chicago).unwrap_err();
    assert!(matches!(err, Error::CsvParsing { .. }));
}

#[test]
fn test_empty_export_yields_empty_dataset() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir, "chicago.csv", &format!("{}\n", CHICAGO_STYLE_HEADER));

    let result = loader_for(&dir).load(City::Chicago).unwrap();
    assert!(result.dataset.is_empty());
    assert_eq!(result.stats.rows_read, 0);
    assert_eq!(result.stats.success_rate(), 0.0);
}
