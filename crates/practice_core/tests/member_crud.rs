use practice_core::db::migrations::latest_version;
use practice_core::db::open_db_in_memory;
use practice_core::{Member, MemberRepository, MemberService, RepoError, SqliteMemberRepository};
use rusqlite::Connection;

const INSERT_MEMBER_SQL: &str = include_str!("fixtures/insert_member.sql");

fn seeded_conn() -> Connection {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch(INSERT_MEMBER_SQL).unwrap();
    conn
}

#[test]
fn seeded_members_are_found_by_id_name_and_listing() {
    let conn = seeded_conn();
    let repo = SqliteMemberRepository::try_new(&conn).unwrap();

    let members = repo.find_all().unwrap();
    let member2 = repo.find_by_id(2).unwrap().unwrap();
    let member3 = repo.find_by_name("C").unwrap().unwrap();

    assert_eq!(members.len(), 3);
    assert_eq!(member2.name, "B");
    assert_eq!(member3.name, "C");
    assert_eq!(member3.id, Some(3));
}

#[test]
fn save_then_find_by_id_returns_saved_name() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMemberRepository::try_new(&conn).unwrap();

    let saved = repo.save(&Member::new(1, "A")).unwrap();

    assert_eq!(saved, Member::new(1, "A"));
    assert_eq!(repo.find_by_id(1).unwrap().unwrap().name, "A");
}

#[test]
fn save_all_stores_only_the_given_ids() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMemberRepository::try_new(&conn).unwrap();

    let saved = repo
        .save_all(&[Member::new(2, "B"), Member::new(3, "C")])
        .unwrap();

    assert_eq!(saved.len(), 2);
    assert!(repo.find_by_id(1).unwrap().is_none());
    assert_eq!(repo.count().unwrap(), 2);
}

#[test]
fn save_without_id_assigns_one() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMemberRepository::try_new(&conn).unwrap();

    let first = repo.save(&Member::unsaved("A")).unwrap();
    let second = repo.save(&Member::unsaved("B")).unwrap();

    let first_id = first.id.unwrap();
    let second_id = second.id.unwrap();
    assert_ne!(first_id, second_id);
    assert_eq!(repo.find_by_id(second_id).unwrap().unwrap().name, "B");
}

#[test]
fn save_with_existing_id_replaces_name() {
    let conn = seeded_conn();
    let repo = SqliteMemberRepository::try_new(&conn).unwrap();

    repo.save(&Member::new(1, "Z")).unwrap();

    assert_eq!(repo.find_by_id(1).unwrap().unwrap().name, "Z");
    assert_eq!(repo.count().unwrap(), 3);
}

#[test]
fn rename_then_save_is_visible_on_next_lookup() {
    let conn = seeded_conn();
    let repo = SqliteMemberRepository::try_new(&conn).unwrap();

    let mut member = repo.find_by_id(2).unwrap().unwrap();
    member.change_name("Re_Go");
    repo.save(&member).unwrap();

    assert_eq!(repo.find_by_id(2).unwrap().unwrap().name, "Re_Go");
}

#[test]
fn rename_without_save_is_not_persisted() {
    let conn = seeded_conn();
    let repo = SqliteMemberRepository::try_new(&conn).unwrap();

    let mut member = repo.find_by_id(2).unwrap().unwrap();
    member.change_name("Re_Go");

    assert_eq!(repo.find_by_id(2).unwrap().unwrap().name, "B");
}

#[test]
fn find_by_name_is_exact_and_case_sensitive() {
    let conn = seeded_conn();
    let repo = SqliteMemberRepository::try_new(&conn).unwrap();

    assert!(repo.find_by_name("c").unwrap().is_none());
    assert!(repo.find_by_name("C ").unwrap().is_none());
    assert!(repo.find_by_name("missing").unwrap().is_none());
}

#[test]
fn find_by_name_with_duplicates_returns_one_of_them() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMemberRepository::try_new(&conn).unwrap();
    repo.save_all(&[Member::new(1, "dup"), Member::new(2, "dup")])
        .unwrap();

    let found = repo.find_by_name("dup").unwrap().unwrap();

    assert_eq!(found.name, "dup");
    assert!(matches!(found.id, Some(1) | Some(2)));
}

#[test]
fn delete_by_id_on_absent_id_is_noop() {
    let conn = seeded_conn();
    let repo = SqliteMemberRepository::try_new(&conn).unwrap();

    repo.delete_by_id(42).unwrap();

    assert_eq!(repo.find_all().unwrap().len(), 3);
}

#[test]
fn delete_by_id_removes_only_that_member() {
    let conn = seeded_conn();
    let repo = SqliteMemberRepository::try_new(&conn).unwrap();

    repo.delete_by_id(1).unwrap();

    assert!(repo.find_by_id(1).unwrap().is_none());
    assert!(!repo.exists_by_id(1).unwrap());
    assert!(repo.exists_by_id(2).unwrap());
}

#[test]
fn delete_all_empties_storage_and_is_idempotent() {
    let conn = seeded_conn();
    let repo = SqliteMemberRepository::try_new(&conn).unwrap();

    repo.delete_all().unwrap();
    assert!(repo.find_all().unwrap().is_empty());

    repo.delete_all().unwrap();
    assert!(repo.find_all().unwrap().is_empty());
    assert_eq!(repo.count().unwrap(), 0);
}

#[test]
fn id_column_cannot_be_updated() {
    let conn = seeded_conn();

    let err = conn
        .execute("UPDATE member SET id = 10 WHERE id = 1;", [])
        .unwrap_err();

    assert!(err.to_string().contains("not updatable"));
}

#[test]
fn name_column_rejects_null() {
    let conn = open_db_in_memory().unwrap();

    let result = conn.execute("INSERT INTO member (id, name) VALUES (1, NULL);", []);

    assert!(result.is_err());
}

#[test]
fn service_renames_and_reports_missing_members() {
    let conn = seeded_conn();
    let service = MemberService::new(SqliteMemberRepository::try_new(&conn).unwrap());

    let renamed = service.rename(2, "Re_Go").unwrap();
    assert_eq!(renamed, Member::new(2, "Re_Go"));
    assert_eq!(service.get(2).unwrap().unwrap().name, "Re_Go");

    let err = service.rename(99, "ghost").unwrap_err();
    assert!(matches!(err, RepoError::NotFound(99)));
}

#[test]
fn service_wraps_repository_calls() {
    let conn = open_db_in_memory().unwrap();
    let service = MemberService::new(SqliteMemberRepository::try_new(&conn).unwrap());

    service.register(1, "홍길동").unwrap();
    let assigned = service.register_new("B").unwrap();

    assert_eq!(service.count().unwrap(), 2);
    assert_eq!(service.find_by_name("홍길동").unwrap().unwrap().id, Some(1));
    assert!(service.get(assigned.id.unwrap()).unwrap().is_some());

    service.remove(1).unwrap();
    assert_eq!(service.list().unwrap(), vec![assigned]);

    service.clear().unwrap();
    assert!(service.list().unwrap().is_empty());
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteMemberRepository::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert_eq!(expected_version, latest_version()),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_member_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteMemberRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("member"))
    ));
}

#[test]
fn repository_rejects_connection_missing_name_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("CREATE TABLE member (id INTEGER PRIMARY KEY);")
        .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteMemberRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "member",
            column: "name"
        })
    ));
}
