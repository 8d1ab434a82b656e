// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

diesel::table! {
    colaboradores (matricula) {
        matricula -> Text,
        nome -> Nullable<Text>,
        filial -> Nullable<Text>,
        funcao -> Nullable<Text>,
    }
}

diesel::table! {
    profiles (profile_id) {
        profile_id -> BigInt,
        matricula -> Text,
        email -> Text,
        password_hash -> Text,
        nome -> Nullable<Text>,
        filial -> Nullable<Text>,
        funcao -> Nullable<Text>,
        role -> Text,
        created_at -> Text,
        last_login_at -> Nullable<Text>,
    }
}

diesel::table! {
    sessions (session_id) {
        session_id -> BigInt,
        session_token -> Text,
        profile_id -> BigInt,
        created_at -> Text,
        last_activity_at -> Text,
        expires_at -> Text,
    }
}

diesel::table! {
    painel_ponto (painel_id) {
        painel_id -> BigInt,
        matricula -> Nullable<Text>,
        nome -> Nullable<Text>,
        colaborador_filial -> Nullable<Text>,
        carga_horaria -> Nullable<Integer>,
        funcao -> Nullable<Text>,
        entrada_escala -> Nullable<Text>,
        saida_escala -> Nullable<Text>,
        entrada1 -> Nullable<Text>,
        saida1 -> Nullable<Text>,
        entrada2 -> Nullable<Text>,
        saida2 -> Nullable<Text>,
        intervalo_min -> Nullable<Integer>,
        horas_trabalhadas -> Nullable<Double>,
        expected_hours -> Nullable<Double>,
        hora_extra -> Nullable<Double>,
        status -> Nullable<Text>,
    }
}

diesel::joinable!(sessions -> profiles (profile_id));
diesel::allow_tables_to_appear_in_same_query!(colaboradores, profiles, sessions, painel_ponto);
