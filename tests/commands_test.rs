mod common;

use clap::Parser;
use common::TestServer;
use tellus::cli::{Cli, Command};
use tellus::commands::run;

fn command(args: &[&str]) -> Command {
    let mut argv = vec!["tellus"];
    argv.extend_from_slice(args);
    Cli::parse_from(argv).command
}

#[tokio::test]
async fn test_rooms_command() {
    let server = TestServer::new().await;
    let output = run(command(&["rooms"]), &server.client()).await.unwrap();
    assert_eq!(
        output,
        "- Lab (/tellus/api/rooms/Lab/bookings/)\n- Attic (/tellus/api/rooms/Attic/bookings/)\n"
    );
}

#[tokio::test]
async fn test_form_command_lists_schema_fields() {
    let server = TestServer::new().await;
    let output = run(command(&["form", "Lab"]), &server.client()).await.unwrap();
    assert_eq!(
        output,
        "Form -> /tellus/api/rooms/Lab/bookings/\n\
         \x20 User Name* <username> (Username of the booking's owner)\n\
         \x20 Booking Time* <bookingTime> (Date and time of the booking)\n\
         \x20 Room name* <name> (Room name which the booking take place)\n"
    );
}

#[tokio::test]
async fn test_book_command_posts_and_reloads() {
    let server = TestServer::new().await;
    let output = run(
        command(&[
            "book",
            "Lab",
            "--set",
            "username=carol",
            "--set",
            "bookingTime=2017-03-03 09:00",
            "--set",
            "name=Lab",
        ]),
        &server.client(),
    )
    .await
    .unwrap();

    assert!(output.starts_with("Booking successfully added\nBookings of Lab\n"));
    assert!(output.contains("Username: carol | Time: 2017-03-03 09:00"));
    assert_eq!(server.api.bookings.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_book_command_requires_fields() {
    let server = TestServer::new().await;
    let err = run(command(&["book", "Lab", "--set", "username=carol"]), &server.client())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Missing required fields: bookingTime, name");
    assert_eq!(server.api.bookings.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_command() {
    let server = TestServer::new().await;
    let output = run(
        command(&["delete", "/tellus/api/rooms/Lab/bookings/1/"]),
        &server.client(),
    )
    .await
    .unwrap();
    assert_eq!(output, "The booking has been deleted from the database\n");
}

#[tokio::test]
async fn test_edit_room_command() {
    let server = TestServer::new().await;

    let shown = run(command(&["edit-room", "Lab"]), &server.client()).await.unwrap();
    assert!(shown.contains("Capacity <capacity> = 8"));
    assert!(shown.contains("  [Location]\n    Building <location.building> = TS\n"));
    assert!(!shown.contains("coordinates"));

    run(
        command(&["edit-room", "Lab", "--set", "location.floor=3"]),
        &server.client(),
    )
    .await
    .unwrap();
    let lab = server.api.lab.lock().unwrap().clone();
    assert_eq!(lab["location"]["floor"], "3");
    assert_eq!(lab["name"], "Lab");
}

#[tokio::test]
async fn test_bookings_of_unknown_room() {
    let server = TestServer::new().await;
    let err = run(command(&["bookings", "Cellar"]), &server.client())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Cannot extract information about room 'Cellar'");
}
