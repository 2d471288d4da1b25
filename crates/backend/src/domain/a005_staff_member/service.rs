use contracts::domain::a005_staff_member::aggregate::{StaffMember, StaffMemberDto};
use contracts::shared::list_query::{ListPage, ListQuery};

use crate::domain::common;
use crate::shared::data::store::Repository;

pub fn list(repo: &Repository<StaffMember>, query: &ListQuery) -> ListPage<StaffMember> {
    common::list(repo, query)
}

pub fn get_by_id(repo: &Repository<StaffMember>, id: &str) -> anyhow::Result<StaffMember> {
    common::get(repo, id)
}

pub fn create(repo: &Repository<StaffMember>, dto: StaffMemberDto) -> anyhow::Result<StaffMember> {
    common::validated(dto.validate())?;
    Ok(common::insert(repo, StaffMember::new_for_insert(dto)))
}

pub fn update(repo: &Repository<StaffMember>, id: &str, dto: StaffMemberDto) -> anyhow::Result<StaffMember> {
    common::validated(dto.validate())?;
    common::update(repo, id, |member| member.update(dto))
}

pub fn delete(repo: &Repository<StaffMember>, id: &str) -> anyhow::Result<StaffMember> {
    common::delete(repo, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::seed;
    use contracts::domain::a005_staff_member::aggregate::Department;

    fn repo() -> Repository<StaffMember> {
        Repository::with_items(seed::staff(), seed::first_sequence::STAFF)
    }

    #[test]
    fn test_department_filter() {
        let page = list(&repo(), &ListQuery::new().with_filter("department", "operations"));
        let names: Vec<_> = page.items.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Eunice Akinyi", "James Kamau"]);
    }

    #[test]
    fn test_search_by_role() {
        let page = list(&repo(), &ListQuery::new().with_search("senior ranger"));
        assert_eq!(page.total_count, 2);
    }

    #[test]
    fn test_create_and_lookup_by_numeric_id() {
        let repo = repo();
        let member = create(
            &repo,
            StaffMemberDto {
                name: "Amina Hassan".into(),
                role: "Ranger".into(),
                department: Some(Department::Security),
                contact_email: "amina.hassan@kws.org".into(),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(member.id, 9);
        assert_eq!(get_by_id(&repo, "9").unwrap().name, "Amina Hassan");
    }
}
