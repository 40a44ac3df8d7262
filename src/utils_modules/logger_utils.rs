use crate::common::*;

#[doc = "로그 출력 포맷 함수 - 파일/콘솔 공용"]
fn log_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        &record.args()
    )
}

#[doc = r#"
    전역 로거를 설정하는 함수.

    1. `logs/` 디렉토리 하위에 일 단위로 로그 파일을 생성한다
    2. 하루 단위로 로테이션 하면서 최근 7개 파일만 유지한다
    3. info 레벨 이상의 로그는 stdout 으로도 복제 출력한다

    # Panics
    로거 초기화에 실패한 경우 애플리케이션 종료
"#]
pub fn set_global_logger() {
    Logger::try_with_str("info")
        .expect("Failed to build logger spec")
        .log_to_file(FileSpec::default().directory("logs"))
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(7),
        )
        .duplicate_to_stdout(Duplicate::Info)
        .format_for_files(log_format)
        .format_for_stdout(log_format)
        .start()
        .expect("Failed to initialize logger");
}
