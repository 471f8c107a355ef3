//! RecommendPortfolio Intent
//!
//! While the platform collects slots, bad values are re-elicited and good ones
//! are delegated back. At fulfillment the chosen risk level is turned into a
//! closing recommendation.

use lex_core::{
    DialogResponse, FulfillmentError, FulfillmentState, IntentHandler, IntentRequest,
    InvocationSource, Message, Result,
};

use crate::model::{RiskLevel, UNRECOGNIZED_RISK_LEVEL};
use crate::validation::{AGE_SLOT, INVESTMENT_AMOUNT_SLOT, ValidationRules};

pub const INTENT_NAME: &str = "RecommendPortfolio";

pub const FIRST_NAME_SLOT: &str = "firstName";
pub const RISK_LEVEL_SLOT: &str = "riskLevel";

/// Handler for the `RecommendPortfolio` intent
#[derive(Clone, Debug, Default)]
pub struct RecommendPortfolioHandler {
    rules: ValidationRules,
}

impl RecommendPortfolioHandler {
    pub fn new(rules: ValidationRules) -> Self {
        Self { rules }
    }

    pub const fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    /// Dialog phase: re-prompt for the first bad slot or hand back to the platform
    fn collect(&self, request: &IntentRequest) -> DialogResponse {
        let result = self
            .rules
            .validate(request.slot(AGE_SLOT), request.slot(INVESTMENT_AMOUNT_SLOT));

        if let Some((slot, message)) = result.violation() {
            tracing::debug!(slot, "Re-eliciting slot");
            return DialogResponse::elicit_slot(
                request.session_attributes.clone(),
                request.intent_name(),
                request.slots().clone(),
                slot,
                message.clone(),
            );
        }

        DialogResponse::delegate(request.session_attributes.clone(), request.slots().clone())
    }

    /// Fulfillment phase: close with the recommendation for the chosen risk level
    fn fulfill(&self, request: &IntentRequest) -> Result<DialogResponse> {
        let first_name = required_slot(request, FIRST_NAME_SLOT)?;
        required_slot(request, AGE_SLOT)?;
        required_slot(request, INVESTMENT_AMOUNT_SLOT)?;
        let risk_level = required_slot(request, RISK_LEVEL_SLOT)?;

        let allocation = match risk_level.parse::<RiskLevel>() {
            Ok(level) => level.allocation(),
            Err(e) => {
                tracing::warn!("{}, closing with fallback text", e);
                UNRECOGNIZED_RISK_LEVEL
            }
        };

        let content = recommendation_message(first_name, allocation);
        tracing::info!(risk_level, "Portfolio recommended");

        Ok(DialogResponse::close(
            request.session_attributes.clone(),
            FulfillmentState::Fulfilled,
            Message::plain_text(content),
        ))
    }
}

impl IntentHandler for RecommendPortfolioHandler {
    fn intent_name(&self) -> &str {
        INTENT_NAME
    }

    fn handle(&self, request: &IntentRequest) -> Result<DialogResponse> {
        match &request.invocation_source {
            InvocationSource::DialogCodeHook => Ok(self.collect(request)),
            InvocationSource::FulfillmentCodeHook => self.fulfill(request),
            InvocationSource::Other(source) => {
                Err(FulfillmentError::UnsupportedInvocationSource(source.clone()))
            }
        }
    }
}

/// Closing message shown to the user
pub fn recommendation_message(first_name: &str, recommendation: &str) -> String {
    format!(
        "{first_name} thank you for your information; based on the risk level you defined, \
         my recommendation is to choose an investment portfolio with {recommendation}"
    )
}

fn required_slot<'a>(request: &'a IntentRequest, slot: &str) -> Result<&'a str> {
    request
        .slot(slot)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| FulfillmentError::MissingSlot {
            intent: request.intent_name().to_string(),
            slot: slot.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lex_core::DialogAction;

    fn dialog_request() -> IntentRequest {
        IntentRequest::new(InvocationSource::DialogCodeHook, INTENT_NAME)
            .with_slot(FIRST_NAME_SLOT, "Ana")
            .with_empty_slot(AGE_SLOT)
            .with_empty_slot(INVESTMENT_AMOUNT_SLOT)
            .with_empty_slot(RISK_LEVEL_SLOT)
            .with_session_attribute("channel", "web")
    }

    fn fulfillment_request(risk_level: &str) -> IntentRequest {
        IntentRequest::new(InvocationSource::FulfillmentCodeHook, INTENT_NAME)
            .with_slot(FIRST_NAME_SLOT, "Ana")
            .with_slot(AGE_SLOT, "30")
            .with_slot(INVESTMENT_AMOUNT_SLOT, "10000")
            .with_slot(RISK_LEVEL_SLOT, risk_level)
    }

    #[test]
    fn test_valid_slots_delegate() {
        let request = dialog_request().with_slot(AGE_SLOT, "30");
        let response = RecommendPortfolioHandler::default().handle(&request).unwrap();

        assert_eq!(response.session_attributes, request.session_attributes);
        match response.dialog_action {
            DialogAction::Delegate { slots } => assert_eq!(&slots, request.slots()),
            other => panic!("expected Delegate, got {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range_age_elicits_age() {
        let request = dialog_request().with_slot(AGE_SLOT, "70");
        let response = RecommendPortfolioHandler::default().handle(&request).unwrap();

        match response.dialog_action {
            DialogAction::ElicitSlot {
                intent_name,
                slots,
                slot_to_elicit,
                message,
            } => {
                assert_eq!(intent_name, INTENT_NAME);
                assert_eq!(slot_to_elicit, AGE_SLOT);
                assert_eq!(&slots, request.slots());
                assert!(message.content.contains("65"));
            }
            other => panic!("expected ElicitSlot, got {other:?}"),
        }
        assert_eq!(response.session_attributes, request.session_attributes);
    }

    #[test]
    fn test_small_amount_elicits_amount() {
        let request = dialog_request()
            .with_slot(AGE_SLOT, "40")
            .with_slot(INVESTMENT_AMOUNT_SLOT, "100");
        let response = RecommendPortfolioHandler::default().handle(&request).unwrap();

        match response.dialog_action {
            DialogAction::ElicitSlot { slot_to_elicit, .. } => {
                assert_eq!(slot_to_elicit, INVESTMENT_AMOUNT_SLOT);
            }
            other => panic!("expected ElicitSlot, got {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_age_elicits_age() {
        let request = dialog_request().with_slot(AGE_SLOT, "old enough");
        let response = RecommendPortfolioHandler::default().handle(&request).unwrap();

        assert_eq!(response.dialog_action.kind(), "ElicitSlot");
        assert!(response.message().unwrap().content.contains("whole number"));
    }

    #[test]
    fn test_fulfillment_closes_with_recommendation() {
        let response = RecommendPortfolioHandler::default()
            .handle(&fulfillment_request("Medium"))
            .unwrap();

        match &response.dialog_action {
            DialogAction::Close {
                fulfillment_state,
                message,
            } => {
                assert_eq!(*fulfillment_state, FulfillmentState::Fulfilled);
                assert!(message.content.starts_with("Ana thank you for your information"));
                assert!(message
                    .content
                    .contains("40% bonds (AGG), 60% equities split equally across (SPY) (AAPL)"));
            }
            other => panic!("expected Close, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_risk_level_still_fulfilled() {
        let response = RecommendPortfolioHandler::default()
            .handle(&fulfillment_request("medium"))
            .unwrap();

        assert!(matches!(
            response.dialog_action,
            DialogAction::Close {
                fulfillment_state: FulfillmentState::Fulfilled,
                ..
            }
        ));
        assert!(response.message().unwrap().content.ends_with("risk level not recognized"));
    }

    #[test]
    fn test_missing_slot_at_fulfillment_is_fatal() {
        let request = IntentRequest::new(InvocationSource::FulfillmentCodeHook, INTENT_NAME)
            .with_slot(FIRST_NAME_SLOT, "Ana")
            .with_slot(AGE_SLOT, "30")
            .with_slot(INVESTMENT_AMOUNT_SLOT, "10000")
            .with_empty_slot(RISK_LEVEL_SLOT);

        let err = RecommendPortfolioHandler::default().handle(&request).unwrap_err();
        assert!(matches!(err, FulfillmentError::MissingSlot { ref slot, .. } if slot == RISK_LEVEL_SLOT));

        let blank_name = fulfillment_request("Low").with_slot(FIRST_NAME_SLOT, "  ");
        let err = RecommendPortfolioHandler::default().handle(&blank_name).unwrap_err();
        assert!(matches!(err, FulfillmentError::MissingSlot { ref slot, .. } if slot == FIRST_NAME_SLOT));
    }

    #[test]
    fn test_every_collected_slot_is_required_at_fulfillment() {
        let handler = RecommendPortfolioHandler::default();

        for missing in [FIRST_NAME_SLOT, AGE_SLOT, INVESTMENT_AMOUNT_SLOT, RISK_LEVEL_SLOT] {
            let request = fulfillment_request("Medium").with_empty_slot(missing);
            let err = handler.handle(&request).unwrap_err();
            assert!(
                matches!(err, FulfillmentError::MissingSlot { ref slot, .. } if slot == missing),
                "slot {missing}: {err}"
            );
        }
    }

    #[test]
    fn test_unknown_invocation_source_is_rejected() {
        let request = IntentRequest::new(InvocationSource::Other("Preview".into()), INTENT_NAME);
        let err = RecommendPortfolioHandler::default().handle(&request).unwrap_err();
        assert!(matches!(err, FulfillmentError::UnsupportedInvocationSource(ref s) if s == "Preview"));
    }

    #[test]
    fn test_custom_rules_are_applied() {
        let handler = RecommendPortfolioHandler::new(ValidationRules::new(80, 5000).unwrap());
        let request = dialog_request().with_slot(AGE_SLOT, "70");

        assert_eq!(handler.rules().max_age, 80);
        assert_eq!(handler.handle(&request).unwrap().dialog_action.kind(), "Delegate");
    }
}
