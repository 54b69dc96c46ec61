use cinema_booking::{CinemaError, JsonScreenStore, TicketOffice};
use std::collections::HashSet;
use std::sync::Arc;
use tempfile::TempDir;

#[tokio::test]
async fn test_concurrent_same_seat_yields_single_winner() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonScreenStore::new(temp_dir.path());
    let office = Arc::new(TicketOffice::open(store).await.unwrap());

    office.add_screen(1, 10, 20).await.unwrap();
    office.assign_movie(1, "Nova", 1200).await.unwrap();

    let mut handles = Vec::new();
    for _ in 0..2 {
        let office = Arc::clone(&office);
        handles.push(tokio::spawn(async move {
            office.book_ticket("Nova", 1, 1).await
        }));
    }

    let mut tickets = 0;
    let mut unavailable = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(ticket) => {
                assert_eq!((ticket.column(), ticket.row()), (1, 1));
                tickets += 1;
            }
            Err(CinemaError::SeatUnavailable { column: 1, row: 1 }) => unavailable += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(tickets, 1);
    assert_eq!(unavailable, 1);

    let screen = office.find_screen(1).await.unwrap();
    assert_eq!(screen.seats().count_available(), 199);
}

#[tokio::test]
async fn test_concurrent_random_bookings_are_distinct() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonScreenStore::new(temp_dir.path());
    let office = Arc::new(TicketOffice::open(store).await.unwrap());

    office.add_screen(1, 5, 5).await.unwrap();
    office.assign_movie(1, "Nova", 900).await.unwrap();

    let mut handles = Vec::new();
    for _ in 0..20 {
        let office = Arc::clone(&office);
        handles.push(tokio::spawn(
            async move { office.book_random_ticket("Nova").await },
        ));
    }

    let mut seats = HashSet::new();
    for handle in handles {
        let ticket = handle.await.unwrap().unwrap();
        assert!(seats.insert((ticket.column(), ticket.row())));
    }

    assert_eq!(seats.len(), 20);
    let screen = office.find_screen(1).await.unwrap();
    assert_eq!(screen.seats().count_available(), 5);
}

#[tokio::test]
async fn test_concurrent_bookings_on_different_screens() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonScreenStore::new(temp_dir.path());
    let office = Arc::new(TicketOffice::open(store).await.unwrap());

    office.add_screen(1, 4, 4).await.unwrap();
    office.add_screen(2, 4, 4).await.unwrap();
    office.assign_movie(1, "Nova", 1000).await.unwrap();
    office.assign_movie(2, "Ghost", 800).await.unwrap();

    let mut handles = Vec::new();
    for row in 1..=4 {
        for (title, seat) in [("Nova", 1), ("Ghost", 2)] {
            let office = Arc::clone(&office);
            handles.push(tokio::spawn(async move {
                office.book_ticket(title, seat, row).await
            }));
        }
    }

    for handle in handles {
        let ticket = handle.await.unwrap().unwrap();
        match ticket.movie_title() {
            "Nova" => assert_eq!(ticket.screen_id(), 1),
            "Ghost" => assert_eq!(ticket.screen_id(), 2),
            other => panic!("unexpected movie: {other}"),
        }
    }

    assert_eq!(
        office.find_screen(1).await.unwrap().seats().count_available(),
        12
    );
    assert_eq!(
        office.find_screen(2).await.unwrap().seats().count_available(),
        12
    );
}
