//! End-to-end flows through the public API: config, records, events, storage.

use folio::query::{decode, encode, CategoryFilter, SortKey};
use folio::storage::{InteractionKind, InteractionStore, JsonInteractionStore, RecordStore};
use folio::{handle_event, initialize, Action, Config, Event, FolioError, ListView, ViewSettings};
use std::fs;

fn sample_view() -> ListView {
    ListView::new(RecordStore::sample().unwrap(), ViewSettings::default())
}

fn page_ids(view: &ListView) -> Vec<u64> {
    view.derived().page_slice().iter().map(|r| r.id).collect()
}

#[test]
fn sample_sorts() {
    let mut view = sample_view();
    assert_eq!(page_ids(&view), [1, 2, 3, 4, 5, 6]);

    handle_event(&mut view, &Event::SetSort(SortKey::Popular)).unwrap();
    assert_eq!(page_ids(&view)[0], 3);

    handle_event(&mut view, &Event::SetSort(SortKey::Oldest)).unwrap();
    assert_eq!(page_ids(&view).last(), Some(&1));
}

#[test]
fn search_covers_title_excerpt_and_tags() {
    let mut view = sample_view();

    handle_event(&mut view, &Event::SetSearch("DOCKER".into())).unwrap();
    assert!(page_ids(&view).contains(&1));

    handle_event(&mut view, &Event::SetSearch("lightning fast".into())).unwrap();
    assert_eq!(page_ids(&view), [3]);

    handle_event(&mut view, &Event::SetSearch("no such topic".into())).unwrap();
    let vm = view.compute_viewmodel();
    assert!(vm.cards.is_empty());
    assert_eq!(vm.header.result_count, "0 posts found");
    assert!(vm.empty_state.is_some());
    assert_eq!(view.derived().total_pages, 0);
}

#[test]
fn docker_popular_link_round_trips() {
    let mut view = sample_view();
    handle_event(&mut view, &Event::Navigate("?search=docker&sort=popular".into())).unwrap();

    assert_eq!(view.query.search_term(), "docker");
    assert_eq!(view.query.category(), &CategoryFilter::All);
    assert_eq!(view.query.sort_key(), SortKey::Popular);
    assert_eq!(view.query.page(), 1);
    assert_eq!(encode(&view.query), "?search=docker&sort=popular");
}

#[test]
fn category_with_spaces_survives_the_url() {
    let mut view = sample_view();
    let (_, actions) =
        handle_event(&mut view, &Event::SetCategory("Backend Development".into())).unwrap();

    assert_eq!(
        actions,
        vec![Action::ReplaceUrl("/blog?category=Backend+Development".into())]
    );
    assert_eq!(page_ids(&view), [1]);
    assert_eq!(decode("category=Backend+Development"), view.query);
}

#[test]
fn eight_records_make_two_pages() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("posts.json");
    let posts: Vec<String> = (1..=8)
        .map(|id| {
            format!(
                r#"{{"id": {id}, "title": "Post {id}", "excerpt": "", "category": "General", "publishedAt": "2024-01-{id:02}", "published": true}}"#
            )
        })
        .collect();
    fs::write(&data, format!("[{}]", posts.join(","))).unwrap();

    let config = Config {
        data_file: Some(data.to_string_lossy().into_owned()),
        ..Config::default()
    };
    let mut view = initialize(&config).unwrap();

    assert_eq!(view.derived().total_pages, 2);
    assert_eq!(page_ids(&view).len(), 6);

    handle_event(&mut view, &Event::GoToPage(5)).unwrap();
    assert_eq!(view.query.page(), 2);
    assert_eq!(page_ids(&view), [2, 1]);

    let pager = view.compute_viewmodel().pager.unwrap();
    assert_eq!(pager.current, 2);
    assert!(pager.has_previous);
    assert!(!pager.has_next);
}

#[test]
fn drafts_never_listed_but_related_respects_category() {
    let json = r#"[
        {"id": 1, "title": "A", "excerpt": "", "category": "Rust", "publishedAt": "2024-01-01", "published": true},
        {"id": 2, "title": "B", "excerpt": "", "category": "Rust", "publishedAt": "2024-01-02", "published": false},
        {"id": 3, "title": "C", "excerpt": "", "category": "Rust", "publishedAt": "2024-01-03", "published": true},
        {"id": 4, "title": "D", "excerpt": "", "category": "Go", "publishedAt": "2024-01-04", "published": true}
    ]"#;
    let view = ListView::new(RecordStore::from_json(json).unwrap(), ViewSettings::default());

    assert_eq!(page_ids(&view), [4, 3, 1]);

    let detail = view.compute_detail(1).unwrap();
    let related: Vec<u64> = detail.related.iter().map(|c| c.id).collect();
    assert_eq!(related, [3]);
}

#[test]
fn likes_persist_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("interactions.json");

    {
        let mut store = JsonInteractionStore::new(path.clone()).unwrap();
        let mut view = sample_view();
        view.interactions = store.load().unwrap();

        let (_, actions) = handle_event(&mut view, &Event::ToggleLike(4)).unwrap();
        for action in actions {
            if let Action::PersistInteraction { kind, id, marked } = action {
                store.set_marked(kind, id, marked).unwrap();
            }
        }
    }

    let store = JsonInteractionStore::new(path).unwrap();
    let interactions = store.load().unwrap();
    assert!(interactions.contains(InteractionKind::Like, 4));
    assert!(!interactions.contains(InteractionKind::Bookmark, 4));

    let mut view = sample_view();
    view.interactions = interactions;
    let card = view
        .compute_viewmodel()
        .cards
        .into_iter()
        .find(|c| c.id == 4)
        .unwrap();
    assert!(card.liked);
}

#[test]
fn config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "page_size = 2\nsite_origin = \"https://ashish.dev\"\ntheme = \"folio-light\"\n",
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();
    let mut view = initialize(&config).unwrap();
    assert_eq!(view.derived().total_pages, 3);
    assert_eq!(view.settings.theme.name, "folio-light");

    let (_, actions) = handle_event(&mut view, &Event::Share(5)).unwrap();
    assert!(matches!(
        &actions[0],
        Action::ShareLink { url, .. } if url == "https://ashish.dev/blog/5"
    ));
}

#[test]
fn missing_config_and_data_files_error() {
    let err = Config::from_file(std::path::Path::new("/no/such/folio.toml")).unwrap_err();
    assert!(matches!(err, FolioError::Config(_)));

    let config = Config {
        data_file: Some("/no/such/posts.json".to_string()),
        ..Config::default()
    };
    assert!(matches!(initialize(&config), Err(FolioError::Io(_))));
}
