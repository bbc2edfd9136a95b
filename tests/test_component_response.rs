// Integration tests for the component interaction response flow.
// The transport is mocked; every test checks what actually reached it.

mod adapters;

use std::sync::Arc;
use std::time::Duration;

use adapters::MockTransport;
use component_response::builder::{
    CreateAllowedMentions,
    CreateButton,
    CreateEmbed,
    CreateResponseMessage,
    ParseValue,
};
use component_response::http::{ErrorResponse, Transport, TransportError};
use component_response::model::application::{ComponentInteraction, InteractionResponseType};
use component_response::model::id::MessageId;
use component_response::prelude::*;
use component_response::{Error, ProtocolInvariantViolation};
use serde_json::{json, Value};

#[derive(Clone, Copy, Debug)]
enum Entry {
    Edit,
    Acknowledge,
    AcknowledgeEphemeral,
}

const ENTRIES: [Entry; 3] = [Entry::Edit, Entry::Acknowledge, Entry::AcknowledgeEphemeral];

async fn call(ctx: &InteractionContext, entry: Entry) -> Result<(), Error> {
    match entry {
        Entry::Edit => ctx.edit(CreateResponseMessage::new().content("updated")).await,
        Entry::Acknowledge => ctx.acknowledge().await,
        Entry::AcknowledgeEphemeral => ctx.acknowledge_ephemeral().await,
    }
}

fn raw_interaction() -> Value {
    json!({
        "id": "846462639134605312",
        "application_id": "772277888223051776",
        "type": 3,
        "data": {"custom_id": "poll:close", "component_type": 2},
        "channel_id": "345626669114982402",
        "message": {
            "id": "846462631144226826",
            "channel_id": "345626669114982402",
            "content": "Poll: lunch?",
        },
        "token": "unique_interaction_token",
        "version": 1,
    })
}

fn create_context(raw: Value, transport: &Arc<MockTransport>) -> InteractionContext {
    create_context_with_defaults(raw, transport, ResponseDefaults::new())
}

fn create_context_with_defaults(
    raw: Value,
    transport: &Arc<MockTransport>,
    defaults: ResponseDefaults,
) -> InteractionContext {
    let interaction: ComponentInteraction = serde_json::from_value(raw).unwrap();
    InteractionContext::new(
        interaction,
        Arc::clone(transport) as Arc<dyn Transport>,
        Arc::new(defaults),
    )
}

#[tokio::test]
async fn single_response_succeeds_for_every_entry_point() {
    for entry in ENTRIES {
        let transport = Arc::new(MockTransport::new());
        let ctx = create_context(raw_interaction(), &transport);

        call(&ctx, entry).await.unwrap();

        assert_eq!(ctx.state(), ResponseState::Responded, "{entry:?}");
        assert_eq!(transport.get_responses().len(), 1, "{entry:?}");
    }
}

#[tokio::test]
async fn second_response_is_rejected_for_every_pair() {
    for first in ENTRIES {
        for second in ENTRIES {
            let transport = Arc::new(MockTransport::new());
            let ctx = create_context(raw_interaction(), &transport);

            call(&ctx, first).await.unwrap();
            let result = call(&ctx, second).await;

            assert!(
                matches!(result, Err(Error::AlreadyResponded(_))),
                "{first:?} then {second:?}: {result:?}"
            );
            assert_eq!(ctx.state(), ResponseState::Responded);
            assert_eq!(transport.attempts(), 1);
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn racing_handlers_send_exactly_once() {
    for first in ENTRIES {
        for second in ENTRIES {
            let transport = Arc::new(MockTransport::with_delay(Duration::from_millis(10)));
            let ctx = Arc::new(create_context(raw_interaction(), &transport));

            let a = tokio::spawn({
                let ctx = Arc::clone(&ctx);
                async move { call(&ctx, first).await }
            });
            let b = tokio::spawn({
                let ctx = Arc::clone(&ctx);
                async move { call(&ctx, second).await }
            });
            let results = [a.await.unwrap(), b.await.unwrap()];

            assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
            assert_eq!(
                results.iter().filter(|r| matches!(r, Err(Error::AlreadyResponded(_)))).count(),
                1
            );
            assert_eq!(transport.get_responses().len(), 1);
            assert_eq!(transport.attempts(), 1);
        }
    }
}

#[tokio::test]
async fn edit_payload_merges_defaults_per_field() {
    let defaults = ResponseDefaults::new()
        .allowed_mentions(CreateAllowedMentions::new())
        .suppress_embeds(true);
    let transport = Arc::new(MockTransport::new());
    let ctx = create_context_with_defaults(raw_interaction(), &transport, defaults);

    let builder = CreateResponseMessage::new()
        .content("Poll closed")
        .embed(CreateEmbed::new().title("Results").field("Yes", "3", true))
        .button(CreateButton::new("poll:reopen").label("Reopen"))
        .allowed_mentions(CreateAllowedMentions::new().parse(ParseValue::Roles));
    ctx.edit(builder).await.unwrap();

    let responses = transport.get_responses();
    assert_eq!(responses[0].interaction_id, ctx.interaction().id);
    assert_eq!(responses[0].kind, InteractionResponseType::UpdateMessage);
    assert_eq!(
        responses[0].payload_json(),
        Some(json!({
            "content": "Poll closed",
            "embeds": [{
                "title": "Results",
                "fields": [{"name": "Yes", "value": "3", "inline": true}],
            }],
            "components": [{
                "type": 1,
                "components": [{
                    "type": 2,
                    "style": 1,
                    "custom_id": "poll:reopen",
                    "label": "Reopen",
                    "disabled": false,
                }],
            }],
            "allowed_mentions": {"parse": ["roles"], "users": [], "roles": []},
            "flags": 4,
        }))
    );
}

#[tokio::test]
async fn explicit_no_restriction_is_not_overridden() {
    let defaults = ResponseDefaults::new().allowed_mentions(CreateAllowedMentions::new());
    let transport = Arc::new(MockTransport::new());
    let ctx = create_context_with_defaults(raw_interaction(), &transport, defaults);

    ctx.edit(CreateResponseMessage::new().content("@everyone").clear_allowed_mentions())
        .await
        .unwrap();

    assert_eq!(transport.get_responses()[0].payload_json(), Some(json!({"content": "@everyone"})));
}

#[tokio::test]
async fn acknowledge_payloads() {
    let defaults = ResponseDefaults::new().allowed_mentions(CreateAllowedMentions::new());

    let transport = Arc::new(MockTransport::new());
    let ctx = create_context_with_defaults(raw_interaction(), &transport, defaults.clone());
    ctx.acknowledge().await.unwrap();
    let plain = &transport.get_responses()[0];
    assert_eq!(plain.kind, InteractionResponseType::DeferredUpdateMessage);
    assert!(plain.payload.is_none());

    let transport = Arc::new(MockTransport::new());
    let ctx = create_context_with_defaults(raw_interaction(), &transport, defaults);
    ctx.acknowledge_ephemeral().await.unwrap();
    let ephemeral = &transport.get_responses()[0];
    assert_eq!(ephemeral.kind, InteractionResponseType::DeferredUpdateMessage);
    assert_eq!(ephemeral.payload_json(), Some(json!({"flags": 64})));
}

#[test]
fn custom_id_lookup() {
    let transport = Arc::new(MockTransport::new());

    let ctx = create_context(raw_interaction(), &transport);
    assert_eq!(ctx.custom_id().unwrap(), "poll:close");

    let mut raw = raw_interaction();
    raw["data"].as_object_mut().unwrap().remove("custom_id");
    let ctx = create_context(raw, &transport);
    assert!(matches!(
        ctx.custom_id(),
        Err(Error::ProtocolInvariant(ProtocolInvariantViolation::MissingCustomId))
    ));
}

#[test]
fn message_lookup_for_ephemeral_message() {
    let transport = Arc::new(MockTransport::new());

    let mut raw = raw_interaction();
    raw.as_object_mut().unwrap().remove("message");
    raw["message_id"] = json!("846462631144226826");
    let ctx = create_context(raw, &transport);

    assert!(ctx.message().is_none());
    assert_eq!(ctx.message_id().unwrap(), MessageId::new(846462631144226826));

    let mut raw = raw_interaction();
    raw.as_object_mut().unwrap().remove("message");
    let ctx = create_context(raw, &transport);
    assert!(matches!(
        ctx.message_id(),
        Err(Error::ProtocolInvariant(ProtocolInvariantViolation::MissingMessageId))
    ));
}

#[tokio::test]
async fn transport_failure_allows_retry() {
    let transport = Arc::new(MockTransport::new());
    transport.fail_next(TransportError::UnsuccessfulRequest(ErrorResponse::new(
        503,
        "upstream unavailable",
    )));
    let ctx = create_context(raw_interaction(), &transport);

    let err = ctx.edit(CreateResponseMessage::new().content("first try")).await.unwrap_err();
    assert!(err.is_retryable());
    assert!(matches!(&err, Error::Dispatch(inner) if inner.status_code() == Some(503)));
    assert_eq!(ctx.state(), ResponseState::Pending);
    assert!(transport.get_responses().is_empty());

    ctx.edit(CreateResponseMessage::new().content("second try")).await.unwrap();
    assert_eq!(ctx.state(), ResponseState::Responded);
    assert_eq!(
        transport.get_responses()[0].payload_json(),
        Some(json!({"content": "second try"}))
    );
}

#[tokio::test]
async fn oversized_edit_is_rejected_before_sending() {
    let transport = Arc::new(MockTransport::new());
    let ctx = create_context(raw_interaction(), &transport);

    let err = ctx.edit(CreateResponseMessage::new().content("x".repeat(2001))).await.unwrap_err();

    assert!(matches!(err, Error::Model(ModelError::TooLarge { .. })));
    assert_eq!(transport.attempts(), 0);
    assert_eq!(ctx.state(), ResponseState::Pending);

    ctx.acknowledge().await.unwrap();
    assert!(ctx.is_responded());
}
