// Relay orchestration tests with a scripted completion backend

use async_trait::async_trait;
use gatordocs::cache::{AnswerCache, CacheConfig};
use gatordocs::error::{RelayError, Result};
use gatordocs::ollama::CompletionBackend;
use gatordocs::relay::Relay;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

enum Behavior {
    Reply(String),
    ConnectionRefused,
    MalformedBody,
}

struct ScriptedBackend {
    behavior: Behavior,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    fn new(behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn replying(text: &str) -> Arc<Self> {
        Self::new(Behavior::Reply(text.to_string()))
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionBackend for ScriptedBackend {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().push(prompt.to_string());
        match &self.behavior {
            Behavior::Reply(text) => Ok(text.clone()),
            Behavior::ConnectionRefused => {
                Err(RelayError::Connection("tcp connect error".to_string()))
            }
            Behavior::MalformedBody => Err(RelayError::Parse(
                "expected value at line 1 column 1".to_string(),
            )),
        }
    }

    fn endpoint(&self) -> &str {
        "http://localhost:11434/api/generate"
    }

    fn model(&self) -> &str {
        "llama3:8b"
    }
}

fn relay_with(backend: Arc<ScriptedBackend>, config: &CacheConfig) -> Relay {
    Relay::new(backend, AnswerCache::new(config))
}

#[tokio::test]
async fn test_successful_ask_is_cached_within_ttl() {
    let backend = ScriptedBackend::replying("Set the disabled prop to true.");
    let relay = relay_with(backend.clone(), &CacheConfig::default());

    let first = relay.ask("Button", "How do I disable it?").await;
    assert_eq!(first.subject, "Button");
    assert_eq!(first.text, "Set the disabled prop to true.");
    assert!(!first.is_error);
    assert!(first.produced_at > 0);

    // Identical question within the TTL: same text, no second backend call.
    let second = relay.ask("Button", "How do I disable it?").await;
    assert_eq!(second.text, first.text);
    assert!(!second.is_error);
    assert_eq!(backend.call_count(), 1);

    let stats = relay.cache_stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.stores, 1);
    assert_eq!(relay.cache_len(), 1);
}

#[tokio::test]
async fn test_prompt_embeds_subject_and_question() {
    let backend = ScriptedBackend::replying("ok");
    let relay = relay_with(backend.clone(), &CacheConfig::default());

    relay.ask("Card", "Can I nest cards?").await;

    let prompts = backend.prompts.lock();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Component: Card"));
    assert!(prompts[0].contains("Question: Can I nest cards?"));
}

#[tokio::test]
async fn test_expired_entry_triggers_a_new_call() {
    let backend = ScriptedBackend::replying("ok");
    // Zero TTL: every stored answer is already stale on the next lookup.
    let relay = relay_with(
        backend.clone(),
        &CacheConfig {
            ttl_seconds: 0,
            ..CacheConfig::default()
        },
    );

    relay.ask("Button", "q").await;
    relay.ask("Button", "q").await;
    assert_eq!(backend.call_count(), 2);
}

#[tokio::test]
async fn test_distinct_questions_are_cached_separately() {
    let backend = ScriptedBackend::replying("ok");
    let relay = relay_with(backend.clone(), &CacheConfig::default());

    relay.ask("Button", "How wide?").await;
    relay.ask("Button", "How tall?").await;
    assert_eq!(backend.call_count(), 2);

    // Both repeats come from cache.
    relay.ask("Button", "How wide?").await;
    relay.ask("Button", "How tall?").await;
    assert_eq!(backend.call_count(), 2);
}

#[tokio::test]
async fn test_connection_failure_yields_error_answer() {
    let backend = ScriptedBackend::new(Behavior::ConnectionRefused);
    let relay = relay_with(backend.clone(), &CacheConfig::default());

    let answer = relay.ask("Button", "How do I disable it?").await;
    assert!(answer.is_error);
    assert_eq!(answer.subject, "Button");
    assert!(answer
        .text
        .contains("Could not connect to the completion service"));
    assert!(answer.text.contains("llama3:8b"));
}

#[tokio::test]
async fn test_failures_are_never_cached() {
    let backend = ScriptedBackend::new(Behavior::ConnectionRefused);
    let relay = relay_with(backend.clone(), &CacheConfig::default());

    relay.ask("Button", "q").await;
    relay.ask("Button", "q").await;

    // Every identical retry goes back to the network, never to a cached error.
    assert_eq!(backend.call_count(), 2);
    assert_eq!(relay.cache_len(), 0);
    assert_eq!(relay.cache_stats().stores, 0);
}

#[tokio::test]
async fn test_parse_failure_message_is_classified() {
    let backend = ScriptedBackend::new(Behavior::MalformedBody);
    let relay = relay_with(backend, &CacheConfig::default());

    let answer = relay.ask("Alert", "q").await;
    assert!(answer.is_error);
    assert!(answer.text.starts_with("Error processing the AI response:"));
}
