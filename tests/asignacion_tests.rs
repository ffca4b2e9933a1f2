use asignador_vicidial::algorithm::{ejecutar_asignacion, rellenar_id_cliente, LibroAsignaciones};
use asignador_vicidial::excel::base_desde_filas;
use asignador_vicidial::models::{BaseLeads, EstadoAsignacion, Valor};
use asignador_vicidial::AsignadorError;
use std::collections::HashSet;

// base con una fila por razón social indicada; id_cliente = 100 + índice
fn base_con(razones: &[&str]) -> BaseLeads {
    let filas = razones
        .iter()
        .enumerate()
        .map(|(i, r)| vec![Valor::Numero(100.0 + i as f64), Valor::from(*r)])
        .collect();
    base_desde_filas(&["id_cliente", "razon_social"], filas).expect("Debe construir la base")
}

fn contar(base: &BaseLeads, estado: EstadoAsignacion) -> usize {
    base.registros().iter().filter(|l| l.asignado == estado).count()
}

#[test]
fn test_asignacion_dentro_de_lo_disponible() {
    let mut base = base_con(&["A"; 5]);
    let mut libro = LibroAsignaciones::new();
    libro.agregar("E1", "A", 3).unwrap();

    let r = ejecutar_asignacion(&mut base, &libro, 14).expect("Debe asignar");

    assert_eq!(contar(&base, EstadoAsignacion::Si), 3);
    assert_eq!(contar(&base, EstadoAsignacion::No), 2);
    assert!(r.avisos.is_empty());
    assert_eq!(r.vicidial.len(), 3);
    for lead in base.registros().iter().take(3) {
        assert_eq!(lead.id_asesor, "E1");
        assert_eq!(lead.dia_asignacion, Valor::Numero(14.0));
    }
    for lead in base.registros().iter().skip(3) {
        assert_eq!(lead.id_asesor, "");
        assert_eq!(lead.dia_asignacion, Valor::Vacio);
    }
}

#[test]
fn test_asignacion_parcial_emite_aviso() {
    let mut base = base_con(&["A"; 5]);
    let mut libro = LibroAsignaciones::new();
    libro.agregar("E1", "A", 10).unwrap();

    let r = ejecutar_asignacion(&mut base, &libro, 1).expect("Debe asignar");

    assert_eq!(contar(&base, EstadoAsignacion::Si), 5);
    assert_eq!(r.vicidial.len(), 5);
    assert_eq!(r.avisos.len(), 1);
    assert_eq!(r.avisos[0].id_asesor, "E1");
    assert_eq!(r.avisos[0].razon_social, "A");
    assert_eq!(r.avisos[0].disponibles, 5);
    assert_eq!(r.avisos[0].solicitados, 10);
}

#[test]
fn test_dos_asesores_compiten_por_la_misma_razon() {
    let mut base = base_con(&["A"; 4]);
    let mut libro = LibroAsignaciones::new();
    libro.agregar("agente1", "A", 3).unwrap();
    libro.agregar("agente2", "A", 3).unwrap();

    let r = ejecutar_asignacion(&mut base, &libro, 2).expect("Debe asignar");

    let de = |a: &str| base.registros().iter().filter(|l| l.id_asesor == a).count();
    assert_eq!(de("agente1"), 3);
    assert_eq!(de("agente2"), 1);
    assert_eq!(r.avisos.len(), 1);
    assert_eq!(r.avisos[0].id_asesor, "agente2");
    assert_eq!(r.avisos[0].disponibles, 1);

    let unicos: HashSet<usize> = r.seleccionados.iter().copied().collect();
    assert_eq!(unicos.len(), r.seleccionados.len(), "Ninguna fila se asigna dos veces");
    assert_eq!(r.seleccionados, vec![0, 1, 2, 3]);
}

#[test]
fn test_toma_las_primeras_filas_de_la_razon() {
    let mut base = base_con(&["A", "B", "A", "B", "A"]);
    let mut libro = LibroAsignaciones::new();
    libro.agregar("E1", "A", 2).unwrap();

    let r = ejecutar_asignacion(&mut base, &libro, 5).expect("Debe asignar");

    assert_eq!(r.seleccionados, vec![0, 2]);
    assert_eq!(r.vicidial[0].id_cliente, "00000100");
    assert_eq!(r.vicidial[1].id_cliente, "00000102");
    assert_eq!(base.disponibles("A"), 1);
    assert_eq!(base.disponibles("B"), 2);
}

#[test]
fn test_libro_vacio_no_modifica_la_base() {
    let mut base = base_con(&["A"; 3]);
    let libro = LibroAsignaciones::new();

    let err = ejecutar_asignacion(&mut base, &libro, 1).unwrap_err();
    assert!(matches!(err, AsignadorError::LibroVacio));
    assert_eq!(contar(&base, EstadoAsignacion::No), 3);
}

#[test]
fn test_pasadas_repetidas_consumen_lo_que_queda() {
    let mut base = base_con(&["A"; 5]);
    let mut libro = LibroAsignaciones::new();
    libro.agregar("E1", "A", 3).unwrap();

    let r1 = ejecutar_asignacion(&mut base, &libro, 1).unwrap();
    let r2 = ejecutar_asignacion(&mut base, &libro, 2).unwrap();

    assert_eq!(r1.seleccionados, vec![0, 1, 2]);
    assert_eq!(r2.seleccionados, vec![3, 4]);
    assert_eq!(r2.avisos.len(), 1);
    assert_eq!(r2.avisos[0].disponibles, 2);
    // las filas de la primera pasada conservan su día
    assert_eq!(base.registros()[0].dia_asignacion, Valor::Numero(1.0));
    assert_eq!(base.registros()[4].dia_asignacion, Valor::Numero(2.0));
    assert_eq!(libro.len(), 1, "El libro no se vacía al asignar");
}

#[test]
fn test_sin_disponibles_es_resultado_vacio() {
    let mut base = base_con(&["A", "A"]);
    let mut libro = LibroAsignaciones::new();
    libro.agregar("E1", "Z", 2).unwrap();

    let r = ejecutar_asignacion(&mut base, &libro, 1).expect("No debe fallar");
    assert_eq!(r.total_asignado(), 0);
    assert!(r.vicidial.is_empty());
    assert_eq!(r.avisos.len(), 1);
    assert_eq!(r.avisos[0].disponibles, 0);
}

#[test]
fn test_filas_ya_asignadas_o_con_otro_estado_se_excluyen() {
    let filas = vec![
        vec![Valor::from("1"), Valor::from("A"), Valor::from("SI"), Valor::from("E9")],
        vec![Valor::from("2"), Valor::from("A"), Valor::from("pendiente"), Valor::Vacio],
        vec![Valor::from("3"), Valor::from("A"), Valor::from("NO"), Valor::Vacio],
        vec![Valor::from("4"), Valor::from("A"), Valor::Vacio, Valor::Vacio],
    ];
    let mut base = base_desde_filas(&["id_cliente", "razon_social", "asignado", "id_asesor"], filas).unwrap();
    let mut libro = LibroAsignaciones::new();
    libro.agregar("E1", "A", 5).unwrap();

    let r = ejecutar_asignacion(&mut base, &libro, 9).unwrap();

    assert_eq!(r.seleccionados, vec![2]);
    assert_eq!(base.registros()[0].id_asesor, "E9");
    assert_eq!(base.registros()[1].asignado, EstadoAsignacion::Otro("pendiente".to_string()));
    assert_eq!(base.registros()[3].asignado, EstadoAsignacion::Otro(String::new()));
    assert_eq!(base.registros()[3].id_asesor, "");
}

#[test]
fn test_asignado_vacio_no_cuenta_como_disponible() {
    let filas = vec![
        vec![Valor::from("1"), Valor::from("A"), Valor::Vacio],
        vec![Valor::from("2"), Valor::from("A"), Valor::from("NO")],
    ];
    let mut base = base_desde_filas(&["id_cliente", "razon_social", "asignado"], filas).unwrap();
    assert_eq!(base.disponibles("A"), 1);

    let mut libro = LibroAsignaciones::new();
    libro.agregar("E1", "A", 1).unwrap();
    let r = ejecutar_asignacion(&mut base, &libro, 5).unwrap();

    assert_eq!(r.seleccionados, vec![1]);
    assert!(r.avisos.is_empty());
    // la celda vacía se exporta vacía
    let lead = &base.registros()[0];
    let columna = &base.columnas()[2];
    assert_eq!(base.celda(lead, columna), Valor::Vacio);
}

#[test]
fn test_sin_columna_asignado_todas_las_filas_estan_disponibles() {
    let base = base_con(&["A", "A"]);
    assert_eq!(base.disponibles("A"), 2);
    assert!(base.registros().iter().all(|l| l.asignado == EstadoAsignacion::No));
}

#[test]
fn test_vicidial_en_orden_de_solicitudes() {
    let mut base = base_con(&["A", "B", "A", "B"]);
    let mut libro = LibroAsignaciones::new();
    libro.agregar("E2", "B", 2).unwrap();
    libro.agregar("E1", "A", 1).unwrap();

    let r = ejecutar_asignacion(&mut base, &libro, 3).unwrap();

    let pares: Vec<(&str, &str)> = r
        .vicidial
        .iter()
        .map(|f| (f.id_cliente.as_str(), f.id_asesor.as_str()))
        .collect();
    assert_eq!(pares, vec![("00000101", "E2"), ("00000103", "E2"), ("00000100", "E1")]);
}

#[test]
fn test_rellenar_id_cliente() {
    assert_eq!(rellenar_id_cliente("123"), "00000123");
    assert_eq!(rellenar_id_cliente(""), "00000000");
    assert_eq!(rellenar_id_cliente("12345678"), "12345678");
    assert_eq!(rellenar_id_cliente("123456789"), "123456789");
    assert_eq!(rellenar_id_cliente("AB12"), "0000AB12");
    assert_eq!(rellenar_id_cliente("-42"), "-0000042");
}
