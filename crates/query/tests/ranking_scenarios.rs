use index::TermWeightingIndex;
use query::{search, Ranker};

fn ranker(texts: &[&str]) -> Ranker {
    Ranker::new(TermWeightingIndex::build_from_texts(texts.iter().copied()).unwrap())
}

#[test]
fn state_management_query_picks_state_graph_doc() {
    let ranker = ranker(&[
        "StateGraph is used for state management",
        "MessageGraph is used for messages",
        "LangChain builds LLM apps",
    ]);

    let top = ranker.search("state management", 1);
    assert_eq!(top[0].text, "StateGraph is used for state management");

    let two = ranker.search("state management", 2);
    assert!(!two.is_empty() && two.len() <= 2);
}

#[test]
fn generic_corpus_returns_exactly_top_k() {
    let texts: Vec<String> = (0..5)
        .map(|i| format!("Document {} about LangGraph and agents", i))
        .collect();
    let index = TermWeightingIndex::build_from_texts(texts).unwrap();

    assert_eq!(search(&index, "LangGraph", 3).len(), 3);
    assert_eq!(search(&index, "agents", 5).len(), 5);
}

#[test]
fn top_k_beyond_corpus_returns_everything() {
    let ranker = ranker(&["alpha doc", "beta doc"]);
    assert_eq!(ranker.search("doc", 10).len(), 2);
    assert_eq!(ranker.search("", 10).len(), 2);
}

#[test]
fn blank_query_is_a_fallback_not_an_error() {
    let ranker = ranker(&["Sample content"]);
    let hits = ranker.search("", 1);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].text, "Sample content");
}

#[test]
fn unique_term_ranks_its_document_first() {
    let docs = [
        "graphs have nodes and edges",
        "nodes update the shared state",
        "interrupts pause execution for human review",
        "edges route between nodes",
    ];
    let ranker = ranker(&docs);

    for (i, unique) in ["graphs", "shared", "interrupts", "route"].iter().enumerate() {
        let hits = ranker.search(unique, 1);
        assert_eq!(hits[0].text, docs[i], "query {:?}", unique);
    }
}
