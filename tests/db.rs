mod common;

#[test]
fn test_creates_and_removes_db_files() {
    let base = "test_shared_pool_connection.db";

    {
        let test_db = common::TestDb::new(base);
        assert!(!test_db.pool().is_initialized());
        let conn = test_db.pool().get().expect("pool").get();
        assert!(conn.is_ok());
        assert!(test_db.pool().is_initialized());
    }

    let db_path = std::path::Path::new(base);
    assert!(!db_path.exists());
    assert!(!std::path::Path::new(&format!("{base}-shm")).exists());
    assert!(!std::path::Path::new(&format!("{base}-wal")).exists());
}
