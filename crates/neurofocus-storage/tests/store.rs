use std::sync::Arc;

use neurofocus_core::models::category::Category;
use neurofocus_core::models::diagnosis::{CategoryInsight, DiagnosisResult, InsightLevel, LikelihoodBand};
use neurofocus_core::models::profile::Accent;
use neurofocus_core::models::record::ScreeningRecord;
use neurofocus_core::models::report::ReportQuestion;
use neurofocus_storage::error::StorageError;
use neurofocus_storage::file::FileResultStore;
use neurofocus_storage::memory::MemoryResultStore;
use neurofocus_storage::persist::{load_history, spawn_persist};
use neurofocus_storage::store::{BoxFuture, ResultStore};
use uuid::Uuid;

fn sample_record(title: &str) -> ScreeningRecord {
    let band = LikelihoodBand::PossibleIndications;
    ScreeningRecord {
        id: Uuid::new_v4(),
        completed_at: jiff::Timestamp::from_second(1_760_000_000).unwrap(),
        profile_id: "nhs_adult".to_string(),
        profile_title: title.to_string(),
        diagnosis: DiagnosisResult {
            score: 12,
            max_score: 24,
            category: band,
            description: band.description().to_string(),
            accent: band.accent(),
            insights: vec![
                CategoryInsight::new(Category::Hyperactivity, 6, 8, InsightLevel::Significant),
                CategoryInsight::new(Category::WorkingMemory, 1, 4, InsightLevel::Well),
            ],
        },
        transcript: vec![ReportQuestion {
            index: 1,
            text: "How often do you fidget?".to_string(),
            answer: "Often".to_string(),
        }],
    }
}

struct BrokenStore;

impl ResultStore for BrokenStore {
    fn append(&self, _record: ScreeningRecord) -> BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(async { Err(StorageError::Unavailable("disk full".to_string())) })
    }

    fn load_all(&self) -> BoxFuture<'_, Result<Vec<ScreeningRecord>, StorageError>> {
        Box::pin(async { Err(StorageError::Unavailable("disk full".to_string())) })
    }
}

#[tokio::test]
async fn missing_history_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileResultStore::new(dir.path().join("history.json"));
    assert!(store.load_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn file_store_appends_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileResultStore::new(dir.path().join("nested").join("history.json"));

    let first = sample_record("First");
    let second = sample_record("Second");
    store.append(first.clone()).await.unwrap();
    store.append(second.clone()).await.unwrap();

    let loaded = store.load_all().await.unwrap();
    assert_eq!(loaded, vec![first, second]);
    assert!(!dir.path().join("nested").join("history.json.tmp").exists());
}

#[tokio::test]
async fn stored_categories_are_labels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    let store = FileResultStore::new(&path);
    store.append(sample_record("NHS Adult Screener")).await.unwrap();

    let raw: serde_json::Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(raw[0]["category"], "Possible Indications");
    assert_eq!(raw[0]["insights"][0]["category"], "Hyperactivity");
}

#[tokio::test]
async fn unknown_stored_category_falls_back_without_dropping_the_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    let store = FileResultStore::new(&path);
    store.append(sample_record("NHS Adult Screener")).await.unwrap();

    let mut raw: serde_json::Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    raw[0]["insights"][0]["category"] = serde_json::json!("Time Blindness");
    std::fs::write(&path, serde_json::to_vec(&raw).unwrap()).unwrap();

    let loaded = store.load_all().await.unwrap();
    assert_eq!(loaded.len(), 1);
    let insights = &loaded[0].diagnosis.insights;
    assert_eq!(insights[0].category, Category::Inattention);
    assert_eq!(insights[0].score, 6);
    assert_eq!(insights[1].category, Category::WorkingMemory);
}

#[tokio::test]
async fn unknown_band_is_rederived_from_stored_score() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    let store = FileResultStore::new(&path);
    store.append(sample_record("First")).await.unwrap();
    store.append(sample_record("Renamed band")).await.unwrap();

    let mut raw: serde_json::Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    raw[1]["category"] = serde_json::json!("Likely");
    raw[1]["score"] = serde_json::json!(20);
    std::fs::write(&path, serde_json::to_vec(&raw).unwrap()).unwrap();

    let loaded = store.load_all().await.unwrap();
    assert_eq!(loaded.len(), 2);
    let renamed = &loaded[1];
    assert_eq!(renamed.profile_title, "Renamed band");
    // 20/24 is at least 60%.
    assert_eq!(renamed.diagnosis.category, LikelihoodBand::HighLikelihood);
    assert_eq!(renamed.diagnosis.accent, Accent::Orange);
    assert_eq!(renamed.diagnosis.insights.len(), 2);
    assert_eq!(renamed.transcript.len(), 1);
}

#[tokio::test]
async fn corrupt_history_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, b"{ not json").unwrap();

    let store = FileResultStore::new(&path);
    assert!(matches!(store.load_all().await, Err(StorageError::Corrupt { .. })));
}

#[tokio::test]
async fn memory_store_round_trips() {
    let store = MemoryResultStore::new();
    let record = sample_record("NHS Adult Screener");
    store.append(record.clone()).await.unwrap();
    assert_eq!(store.load_all().await.unwrap(), vec![record]);
}

#[tokio::test]
async fn spawn_persist_saves_in_background() {
    let store = Arc::new(MemoryResultStore::new());
    spawn_persist(store.clone(), sample_record("NHS Adult Screener"))
        .await
        .unwrap();
    assert_eq!(store.load_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn spawn_persist_swallows_store_failures() {
    let store: Arc<dyn ResultStore> = Arc::new(BrokenStore);
    // The task itself must complete without panicking.
    spawn_persist(store, sample_record("NHS Adult Screener"))
        .await
        .unwrap();
}

#[tokio::test]
async fn load_history_degrades_to_empty() {
    assert!(load_history(&BrokenStore).await.is_empty());
}
