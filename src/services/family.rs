//! Family roster service

use tracing::{debug, info, warn};

use super::fields::{require_all, value};
use crate::audit::EntityType;
use crate::error::{FinanceError, FinanceResult};
use crate::models::FamilyMember;
use crate::storage::LedgerStore;

/// Member form fields exactly as entered
#[derive(Debug, Clone, Default)]
pub struct MemberInput {
    pub name: Option<String>,
    pub role: Option<String>,
}

/// Service for the family roster
pub struct FamilyService<'a> {
    store: &'a LedgerStore,
}

impl<'a> FamilyService<'a> {
    pub fn new(store: &'a LedgerStore) -> Self {
        Self { store }
    }

    /// Add a member to the roster
    pub fn add(&self, input: MemberInput) -> FinanceResult<FamilyMember> {
        let member = Self::build(&input).inspect_err(|e| warn!(error = %e, "member rejected"))?;

        self.store.family.insert(member.clone())?;
        self.store.log_create(
            EntityType::FamilyMember,
            member.id.to_string(),
            Some(member.name.clone()),
            &member,
        )?;

        info!(id = %member.id, role = %member.role, "family member added");
        Ok(member)
    }

    fn build(input: &MemberInput) -> FinanceResult<FamilyMember> {
        require_all("member", &[&input.name, &input.role])?;

        let member = FamilyMember::new(value(&input.name), value(&input.role));
        member
            .validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;
        Ok(member)
    }

    pub fn list(&self) -> FinanceResult<Vec<FamilyMember>> {
        self.store.family.get_all()
    }

    /// Remove the member a reference points at; unknown references are a no-op
    pub fn remove(&self, reference: &str) -> FinanceResult<Option<FamilyMember>> {
        let Some(found) = self.store.family.find_by_reference(reference)? else {
            debug!(reference, "no family member to remove");
            return Ok(None);
        };

        let removed = self.store.family.remove(found.id)?;
        if let Some(member) = &removed {
            self.store.log_delete(
                EntityType::FamilyMember,
                member.id.to_string(),
                Some(member.name.clone()),
                member,
            )?;
            info!(id = %member.id, "family member removed");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: Option<&str>, role: Option<&str>) -> MemberInput {
        MemberInput {
            name: name.map(Into::into),
            role: role.map(Into::into),
        }
    }

    #[test]
    fn test_add_and_remove_member() {
        let store = LedgerStore::new();
        let service = FamilyService::new(&store);

        let member = service.add(input(Some("Asha"), Some("Parent"))).unwrap();
        assert_eq!(service.list().unwrap(), vec![member.clone()]);

        let removed = service.remove(&member.id.to_string()).unwrap();
        assert_eq!(removed, Some(member));
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_missing_role_rejected() {
        let store = LedgerStore::new();
        let service = FamilyService::new(&store);

        let err = service.add(input(Some("Asha"), None)).unwrap_err();
        assert_eq!(err.to_string(), "Please fill all member fields");
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let store = LedgerStore::new();
        let service = FamilyService::new(&store);
        service.add(input(Some("Asha"), Some("Parent"))).unwrap();

        assert!(service.remove("mem-zzzz").unwrap().is_none());
        assert_eq!(service.list().unwrap().len(), 1);
    }
}
