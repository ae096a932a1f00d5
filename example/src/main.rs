// example/src/main.rs

use brine_rowmap::*;

fn main() -> Result<(), RowMapError> {

    // ResultSet → object, with upper-case snake column names
    let read = GenerationRequest::ReaderToObject {
        request: ReaderToObjectRequest {
            reader_id:   "rs".to_string(),
            object_id:   "employee".to_string(),
            fields_text: SAMPLE_FIELDS.to_string(),
        },
        naming: Some(ColumnNameSpec {
            generate_column_names: true,
            use_separator:         true,
            separator:             "_".to_string(),
            column_case:           ColumnCase::Upper,
        }),
    };
    println!("// ResultSet -> Employee");
    println!("{}\n", generate(&read)?);

    // object → PreparedStatement, numbered through a running counter
    let write = GenerationRequest::ObjectToWriter(ObjectToWriterRequest {
        writer_id:   "ps".to_string(),
        object_id:   "employee".to_string(),
        fields_text: SAMPLE_FIELDS.to_string(),
        counter_id:  Some("idx".to_string()),
    });
    println!("// Employee -> PreparedStatement");
    println!("{}\n", generate(&write)?);

    // The same request as the JSON document a front end would send.
    let json = serde_json::to_string(&write)?;
    println!("// JSON round trip");
    println!("{}", generate_json(&json)?);

    Ok(())
}
