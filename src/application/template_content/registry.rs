//! MapperRegistry - looks up the content mapper for a document type.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::domain::template::DocumentType;

use super::mappers::{
    AosOverdueContent, ApplicationJointContent, ApplicationSoleContent,
    ApplyForFinalOrderContent, BailiffServiceContent, CertificateOfEntitlementContent,
    ConditionalOrderPronouncedContent, ConditionalOrderRefusalContent, CoversheetContent,
    FinalOrderGrantedContent, GeneralLetterContent, NoticeOfProceedingContent,
    NoticeOfProceedingSolicitorContent, RequestForInformationContent,
    RespondentInvitationContent, ServiceOrderContent, SwitchToSoleCoContent,
};
use super::{CommonContent, HoldingPeriodService, TemplateContentMapper};

/// Registered mappers keyed by the document type they produce.
#[derive(Default, Clone)]
pub struct MapperRegistry {
    mappers: HashMap<DocumentType, Arc<dyn TemplateContentMapper>>,
}

impl MapperRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `mapper` under its own document type, replacing any earlier one.
    pub fn register(&mut self, mapper: Arc<dyn TemplateContentMapper>) -> &mut Self {
        let document_type = mapper.document_type();
        debug!(document_type = document_type.as_str(), "Registering content mapper");
        self.mappers.insert(document_type, mapper);
        self
    }

    /// Registry with a mapper for every document type.
    pub fn standard(common: CommonContent, holding: HoldingPeriodService) -> Self {
        let mut registry = Self::new();
        registry
            .register(Arc::new(ApplicationSoleContent::new(common.clone())))
            .register(Arc::new(ApplicationJointContent::new(common.clone())))
            .register(Arc::new(NoticeOfProceedingContent::new(
                common.clone(),
                holding.clone(),
            )))
            .register(Arc::new(NoticeOfProceedingSolicitorContent::new(
                common.clone(),
                holding.clone(),
            )))
            .register(Arc::new(RespondentInvitationContent::new(
                common.clone(),
                holding.clone(),
            )))
            .register(Arc::new(AosOverdueContent::new(common.clone(), holding.clone())))
            .register(Arc::new(SwitchToSoleCoContent::new(common.clone())))
            .register(Arc::new(CertificateOfEntitlementContent::new(
                common.clone(),
                holding.clone(),
            )))
            .register(Arc::new(ConditionalOrderPronouncedContent::new(
                common.clone(),
                holding.clone(),
            )))
            .register(Arc::new(ConditionalOrderRefusalContent::new(common.clone())))
            .register(Arc::new(FinalOrderGrantedContent::new(common.clone())))
            .register(Arc::new(ApplyForFinalOrderContent::new(common.clone(), holding)))
            .register(Arc::new(ServiceOrderContent::new(common.clone())))
            .register(Arc::new(BailiffServiceContent::new(common.clone())))
            .register(Arc::new(GeneralLetterContent::new(common.clone())))
            .register(Arc::new(RequestForInformationContent::new(common.clone())))
            .register(Arc::new(CoversheetContent::new(common)));
        registry
    }

    pub fn get(&self, document_type: DocumentType) -> Option<Arc<dyn TemplateContentMapper>> {
        self.mappers.get(&document_type).cloned()
    }

    pub fn supports(&self, document_type: DocumentType) -> bool {
        self.mappers.contains_key(&document_type)
    }

    /// Supported document types in declaration order.
    pub fn document_types(&self) -> Vec<DocumentType> {
        let mut types: Vec<_> = self.mappers.keys().copied().collect();
        types.sort();
        types
    }

    pub fn len(&self) -> usize {
        self.mappers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappers.is_empty()
    }
}

impl std::fmt::Debug for MapperRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapperRegistry")
            .field("document_types", &self.document_types())
            .finish()
    }
}
