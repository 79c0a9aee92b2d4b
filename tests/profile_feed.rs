use chrono::Utc;
use linguaquest::database::models::Profile;
use linguaquest::services::sync::ProfileFeed;

fn profile(user_id: &str) -> Profile {
    Profile {
        user_id: user_id.to_string(),
        xp: 0,
        level: 1,
        rank: "Bronze".to_string(),
        current_streak: 0,
        longest_streak: 0,
        last_active_date: None,
        accuracy: 0.0,
        lessons_completed: 0,
        challenges_completed: 0,
        perfect_lessons: 0,
        coins: 0,
        tickets: 1,
        coins_earned: 0,
        tickets_earned: 0,
        unlocked_badges: vec![],
        unlocked_achievements: vec![],
        lives: 5,
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn subscribers_receive_their_own_updates_only() {
    let feed = ProfileFeed::new();
    let mut sub_a = feed.subscribe("user-a").await;
    let mut sub_b = feed.subscribe("user-b").await;

    feed.dispatch(&profile("user-a")).await;

    let received = sub_a.rx.try_recv().expect("user-a should get the push");
    assert_eq!(received.user_id, "user-a");
    assert!(sub_b.rx.try_recv().is_err(), "user-b must see nothing");
}

#[tokio::test]
async fn torn_down_subscribers_never_see_another_snapshot() {
    let feed = ProfileFeed::new();
    let mut sub = feed.subscribe("user-a").await;
    assert!(sub.is_live());

    sub.teardown();
    assert!(!sub.is_live());

    feed.dispatch(&profile("user-a")).await;
    assert!(sub.rx.try_recv().is_err());
    // The dead subscriber is pruned on dispatch.
    assert_eq!(feed.subscriber_count().await, 0);
}

#[tokio::test]
async fn dropping_the_handle_prunes_on_next_dispatch() {
    let feed = ProfileFeed::new();
    let sub = feed.subscribe("user-a").await;
    assert_eq!(feed.subscriber_count().await, 1);

    drop(sub);
    feed.dispatch(&profile("user-a")).await;
    assert_eq!(feed.subscriber_count().await, 0);
}
