//! Behaviour every [`ShareRepository`] must share, run against each backend.
//!
//! Ids are chosen so the suite also works on a table whose identity sequence
//! has already moved.

use super::ShareRepository;
use crate::models::Share;
use chrono::NaiveDate;

fn share(id: i32, name: &str, market_price: i32) -> Share {
    Share::new(
        id,
        name,
        market_price,
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    )
}

/// Runs every check in order. The max-id check goes last because it
/// exhausts auto-assigned ids.
pub async fn run_all(repo: &dyn ShareRepository) {
    round_trip(repo).await;
    overwrite_keeps_single_row(repo).await;
    generated_ids_pass_explicit_ids(repo).await;
    generated_ids_not_reused_after_update(repo).await;
    find_all_ordered_without_duplicates(repo).await;
    accepts_max_explicit_id(repo).await;
}

async fn round_trip(repo: &dyn ShareRepository) {
    let saved = repo.save(share(101, "ACME", 100)).await.unwrap();
    assert_eq!(saved, share(101, "ACME", 100));
    assert_eq!(repo.find_by_id(101).await.unwrap(), Some(saved));

    repo.delete_by_id(101).await.unwrap();
    assert!(repo.find_by_id(101).await.unwrap().is_none());
    repo.delete_by_id(101).await.unwrap();
}

async fn overwrite_keeps_single_row(repo: &dyn ShareRepository) {
    repo.save(share(102, "Before", 1)).await.unwrap();
    repo.save(share(102, "After", 2)).await.unwrap();

    let all = repo.find_all().await.unwrap();
    let rows: Vec<&Share> = all.iter().filter(|s| s.share_id == 102).collect();
    assert_eq!(rows, vec![&share(102, "After", 2)]);

    repo.delete_by_id(102).await.unwrap();
}

async fn generated_ids_pass_explicit_ids(repo: &dyn ShareRepository) {
    repo.save(share(5_000, "Explicit", 1)).await.unwrap();

    let generated = repo.save(share(0, "Generated", 1)).await.unwrap();
    assert!(generated.share_id > 5_000);

    repo.delete_by_id(5_000).await.unwrap();
    repo.delete_by_id(generated.share_id).await.unwrap();
}

async fn generated_ids_not_reused_after_update(repo: &dyn ShareRepository) {
    let kept = repo.save(share(0, "Kept", 10)).await.unwrap();
    let removed = repo.save(share(0, "Removed", 20)).await.unwrap();
    repo.delete_by_id(removed.share_id).await.unwrap();

    // Re-pricing goes through the explicit-id path.
    let mut repriced = kept.clone();
    repriced.market_price = 11;
    repo.save(repriced).await.unwrap();

    let next = repo.save(share(0, "Next", 30)).await.unwrap();
    assert!(next.share_id > removed.share_id);

    repo.delete_by_id(kept.share_id).await.unwrap();
    repo.delete_by_id(next.share_id).await.unwrap();
}

async fn find_all_ordered_without_duplicates(repo: &dyn ShareRepository) {
    for id in [303, 301, 302] {
        repo.save(share(id, "Listed", id)).await.unwrap();
    }

    let ids: Vec<i32> = repo
        .find_all()
        .await
        .unwrap()
        .iter()
        .map(|s| s.share_id)
        .collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
    for id in [301, 302, 303] {
        assert!(ids.contains(&id));
    }

    for id in [301, 302, 303] {
        repo.delete_by_id(id).await.unwrap();
    }
}

async fn accepts_max_explicit_id(repo: &dyn ShareRepository) {
    let saved = repo.save(share(i32::MAX, "Max", 1)).await.unwrap();
    assert_eq!(saved.share_id, i32::MAX);
    assert_eq!(repo.find_by_id(i32::MAX).await.unwrap(), Some(saved));

    repo.delete_by_id(i32::MAX).await.unwrap();
}
